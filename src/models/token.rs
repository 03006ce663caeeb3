use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const BEARER: &str = "Bearer";

/// An access token issued by the client-credentials exchange.
///
/// Tokens are never refreshed; once `expires_at` has passed the caller has to
/// authorize again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub data: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub scopes: Vec<String>,
}

impl Token {
    /// Wrap a bearer string obtained elsewhere, e.g. passed on the command line.
    ///
    /// Its expiry and scopes are unknown, so `expires_at` is the Unix epoch and
    /// `scopes` is empty.
    pub fn from_access_token(data: impl Into<String>) -> Self {
        Token {
            data: data.into(),
            token_type: BEARER.to_string(),
            expires_at: DateTime::<Utc>::UNIX_EPOCH,
            scopes: Vec::new(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}
