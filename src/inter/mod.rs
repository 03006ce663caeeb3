mod auth;
mod client;
pub mod codec;
mod transport;
pub(crate) mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::TokenAuthenticator;
pub use client::BankingService;
pub use transport::{ClientCertificate, ClientConfig, Environment, RawResponse, SecureTransport};

use crate::error::Result;
use crate::models::{Balance, Transaction};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;

#[async_trait]
pub trait BankingOperations {
    async fn balance(&self, date: NaiveDate, cancel: &CancellationToken) -> Result<Balance>;

    /// The range is forwarded as given; `start > end` is left for the provider to judge.
    async fn transactions(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        cancel: &CancellationToken,
    ) -> Result<Vec<Transaction>>;
}
