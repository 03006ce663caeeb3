use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Client certificate error: {0}")]
    Credential(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Authorization failed: {0}")]
    Auth(#[from] AuthError),

    /// The provider's error body is the message; it is kept verbatim.
    #[error("Inter API error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] ParseError),
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request cancelled")]
    Cancelled,

    #[error("request timed out")]
    Timeout,

    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        match e.is_timeout() {
            true => TransportError::Timeout,
            false => TransportError::Request(e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(e.into())
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("token endpoint returned {status}: {body}")]
    Rejected { status: StatusCode, body: String },

    #[error("invalid token response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("token expiry of {0} seconds is out of range")]
    InvalidExpiry(i64),
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid date {value:?}: {source}")]
    Date {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid amount {value:?}: {source}")]
    Amount {
        value: String,
        #[source]
        source: rust_decimal::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_body() {
        let err = Error::Api {
            status: StatusCode::BAD_REQUEST,
            body: "invalid request".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Inter API error (400 Bad Request): invalid request"
        );
    }

    #[test]
    fn test_cancelled_is_transport_error() {
        let err: Error = TransportError::Cancelled.into();
        assert!(matches!(err, Error::Transport(TransportError::Cancelled)));
        assert_eq!(err.to_string(), "Transport error: request cancelled");
    }
}
