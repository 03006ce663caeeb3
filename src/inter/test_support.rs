use super::transport::{ClientCertificate, ClientConfig, SecureTransport};
use std::thread::JoinHandle;
use tiny_http::{Response, Server};
use url::Url;

pub(crate) const TEST_CERT: &[u8] = include_bytes!("../../tests/fixtures/client.crt");
pub(crate) const TEST_KEY: &[u8] = include_bytes!("../../tests/fixtures/client.key");

pub(crate) fn test_transport(base_url: &str) -> SecureTransport {
    let certificate = ClientCertificate::from_pem(TEST_CERT, TEST_KEY).unwrap();
    let config = ClientConfig {
        base_url: base_url.to_string(),
        ..ClientConfig::default()
    };
    SecureTransport::new(certificate, &config).unwrap()
}

#[derive(Debug)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn path(&self) -> String {
        self.parsed_url().path().to_string()
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.parsed_url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    pub fn form_pairs(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(self.body.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn parsed_url(&self) -> Url {
        Url::parse(&format!("http://localhost{}", self.url)).unwrap()
    }
}

/// A local HTTP server answering exactly one request with a canned response.
pub(crate) struct MockServer {
    base_url: String,
    handle: JoinHandle<RecordedRequest>,
}

impl MockServer {
    pub fn respond_once(status: u16, body: &str) -> Self {
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let body = body.to_string();

        let handle = std::thread::spawn(move || {
            let mut request = server.recv().unwrap();

            let mut request_body = String::new();
            request
                .as_reader()
                .read_to_string(&mut request_body)
                .unwrap();

            let recorded = RecordedRequest {
                method: request.method().to_string(),
                url: request.url().to_string(),
                headers: request
                    .headers()
                    .iter()
                    .map(|h| (h.field.to_string(), h.value.to_string()))
                    .collect(),
                body: request_body,
            };

            let response = Response::from_string(body).with_status_code(status);
            request.respond(response).unwrap();

            recorded
        });

        Self {
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Wait for the request to have been served and return what the client sent.
    pub fn recorded(self) -> RecordedRequest {
        self.handle.join().unwrap()
    }
}
