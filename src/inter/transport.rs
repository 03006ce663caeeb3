use crate::error::{Error, Result, TransportError};
use reqwest::header::HeaderMap;
use reqwest::{Client, Identity, Method, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

const PRODUCTION_URL: &str = "https://cdpj.partners.bancointer.com.br";
const SANDBOX_URL: &str = "https://cdpj-sandbox.partners.uatinter.co";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_URL,
            Environment::Sandbox => SANDBOX_URL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Applies to each request as a whole, from connect to the end of the body.
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            base_url: environment.api_base_url().to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

/// The certificate and private key presented to the provider during the TLS handshake.
pub struct ClientCertificate {
    identity: Identity,
}

impl ClientCertificate {
    /// Build an identity from a PEM certificate (chain) and its PEM private key.
    pub fn from_pem(cert: &[u8], key: &[u8]) -> Result<Self> {
        if cert.is_empty() || key.is_empty() {
            return Err(Error::Credential(
                "both a certificate and a private key are required".to_string(),
            ));
        }

        let mut pem = Vec::with_capacity(cert.len() + key.len() + 1);
        pem.extend_from_slice(cert);
        pem.push(b'\n');
        pem.extend_from_slice(key);

        let identity = Identity::from_pem(&pem)
            .map_err(|e| Error::Credential(format!("Invalid client certificate: {}", e)))?;

        Ok(Self { identity })
    }
}

impl fmt::Debug for ClientCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCertificate").finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// HTTP transport that always presents the client certificate.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SecureTransport {
    client: Client,
    base_url: String,
}

impl SecureTransport {
    pub fn new(certificate: ClientCertificate, config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .use_rustls_tls()
            .identity(certificate.identity)
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Credential(format!("Failed to build mTLS client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Start a request to `path`, which is resolved against the configured base URL.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{}", self.base_url, path))
    }

    /// Send `request` and read the whole body.
    ///
    /// Nothing is sent when `cancel` has already fired; a later cancellation drops the
    /// in-flight exchange.
    #[instrument(
        name = "Sending request",
        skip_all,
        fields(method = %request.method(), path = request.url().path())
    )]
    pub async fn execute(
        &self,
        request: reqwest::Request,
        cancel: &CancellationToken,
    ) -> std::result::Result<RawResponse, TransportError> {
        if cancel.is_cancelled() {
            return Err(TransportError::Cancelled);
        }

        let round_trip = async {
            let response = self.client.execute(request).await?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await?.to_vec();

            Ok::<_, reqwest::Error>(RawResponse {
                status,
                headers,
                body,
            })
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(TransportError::Cancelled),
            result = round_trip => {
                let response = result?;
                debug!(status = %response.status, bytes = response.body.len(), "Received response");
                Ok(response)
            }
        }
    }
}
