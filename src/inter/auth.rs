use super::transport::SecureTransport;
use super::types::TokenResponse;
use crate::error::{AuthError, Result};
use crate::models::Token;
use chrono::Utc;
use oauth2::{ClientId, ClientSecret, Scope};
use reqwest::{Method, StatusCode};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

const TOKEN_PATH: &str = "/oauth/v2/token";
const GRANT_TYPE: &str = "client_credentials";

/// Runs the OAuth2 client-credentials exchange over the mTLS transport.
#[derive(Debug, Clone)]
pub struct TokenAuthenticator {
    transport: SecureTransport,
}

impl TokenAuthenticator {
    pub fn new(transport: SecureTransport) -> Self {
        Self { transport }
    }

    /// Exchange the client credentials for a token granting `scopes`.
    ///
    /// A single attempt is made. Any status other than 200 is an
    /// [`AuthError::Rejected`] carrying the provider's body as-is.
    #[instrument(name = "Authorizing with Inter", skip_all, fields(client_id = client_id.as_str()))]
    pub async fn authorize(
        &self,
        client_id: &ClientId,
        client_secret: &ClientSecret,
        scopes: &[Scope],
        cancel: &CancellationToken,
    ) -> Result<Token> {
        let scope = scopes
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let form = [
            ("grant_type", GRANT_TYPE),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.secret().as_str()),
            ("scope", scope.as_str()),
        ];

        let request = self
            .transport
            .request(Method::POST, TOKEN_PATH)
            .form(&form)
            .build()?;

        let response = self.transport.execute(request, cancel).await?;

        if response.status != StatusCode::OK {
            return Err(AuthError::Rejected {
                status: response.status,
                body: response.text(),
            }
            .into());
        }

        let token_response: TokenResponse =
            serde_json::from_slice(&response.body).map_err(AuthError::Decode)?;
        let token = token_response.into_token(Utc::now())?;

        debug!(expires_at = %token.expires_at, scopes = ?token.scopes, "Token issued");

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, TransportError};
    use crate::inter::test_support::{MockServer, test_transport};
    use chrono::Duration;

    fn credentials() -> (ClientId, ClientSecret) {
        (
            ClientId::new("client-id".to_string()),
            ClientSecret::new("client-secret".to_string()),
        )
    }

    #[tokio::test]
    async fn test_authorize_returns_token() {
        let server = MockServer::respond_once(
            200,
            r#"{"access_token":"token-abc","token_type":"Bearer","expires_in":3600,"scope":"extrato.read saldo.read"}"#,
        );
        let authenticator = TokenAuthenticator::new(test_transport(server.base_url()));
        let (client_id, client_secret) = credentials();
        let scopes = vec![
            Scope::new("extrato.read".to_string()),
            Scope::new("saldo.read".to_string()),
        ];

        let before = Utc::now();
        let token = authenticator
            .authorize(&client_id, &client_secret, &scopes, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(token.data, "token-abc");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.scopes, vec!["extrato.read", "saldo.read"]);
        assert!(token.expires_at >= before + Duration::seconds(3599));
        assert!(token.expires_at <= Utc::now() + Duration::seconds(3600));

        let request = server.recorded();
        assert_eq!(request.method, "POST");
        assert_eq!(request.path(), "/oauth/v2/token");
        assert_eq!(
            request.header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(
            request.form_pairs(),
            vec![
                ("grant_type".to_string(), "client_credentials".to_string()),
                ("client_id".to_string(), "client-id".to_string()),
                ("client_secret".to_string(), "client-secret".to_string()),
                ("scope".to_string(), "extrato.read saldo.read".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_authorize_rejected_keeps_body() {
        let server = MockServer::respond_once(401, r#"{"error":"invalid_client"}"#);
        let authenticator = TokenAuthenticator::new(test_transport(server.base_url()));
        let (client_id, client_secret) = credentials();

        let result = authenticator
            .authorize(&client_id, &client_secret, &[], &CancellationToken::new())
            .await;

        match result {
            Err(Error::Auth(AuthError::Rejected { status, body })) => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(body, r#"{"error":"invalid_client"}"#);
            }
            other => panic!("expected rejected authorization, got {:?}", other),
        }
        server.recorded();
    }

    #[tokio::test]
    async fn test_authorize_invalid_body() {
        let server = MockServer::respond_once(200, r#"{"transactions": "}"#);
        let authenticator = TokenAuthenticator::new(test_transport(server.base_url()));
        let (client_id, client_secret) = credentials();

        let result = authenticator
            .authorize(&client_id, &client_secret, &[], &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(Error::Auth(AuthError::Decode(_)))));
        server.recorded();
    }

    #[tokio::test]
    async fn test_authorize_expiry_out_of_range() {
        let server = MockServer::respond_once(
            200,
            r#"{"access_token":"token-abc","token_type":"Bearer","expires_in":9223372036854775807,"scope":""}"#,
        );
        let authenticator = TokenAuthenticator::new(test_transport(server.base_url()));
        let (client_id, client_secret) = credentials();

        let result = authenticator
            .authorize(&client_id, &client_secret, &[], &CancellationToken::new())
            .await;

        assert!(matches!(
            result,
            Err(Error::Auth(AuthError::InvalidExpiry(_)))
        ));
        server.recorded();
    }

    #[tokio::test]
    async fn test_authorize_cancelled() {
        let authenticator = TokenAuthenticator::new(test_transport("http://127.0.0.1:9"));
        let (client_id, client_secret) = credentials();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = authenticator
            .authorize(&client_id, &client_secret, &[], &cancel)
            .await;

        assert!(matches!(
            result,
            Err(Error::Transport(TransportError::Cancelled))
        ));
    }
}
