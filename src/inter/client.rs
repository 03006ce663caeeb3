use super::BankingOperations;
use super::codec::{decode_balance, decode_transactions, format_wire_date};
use super::transport::SecureTransport;
use crate::error::{Error, Result};
use crate::models::{Balance, Token, Transaction};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

const BALANCE_PATH: &str = "/banking/v2/saldo";
const STATEMENT_PATH: &str = "/banking/v2/extrato";

/// Balance and statement queries authorized with a fixed bearer token.
///
/// The token is never refreshed. Once it expires every call fails with
/// [`Error::Api`] and a new service has to be built from a fresh token.
#[derive(Debug, Clone)]
pub struct BankingService {
    transport: SecureTransport,
    token: Token,
}

impl BankingService {
    pub fn new(transport: SecureTransport, token: Token) -> Self {
        Self { transport, token }
    }

    async fn fetch(
        &self,
        path: &str,
        query: &[(&str, String)],
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>> {
        let request = self
            .transport
            .request(Method::GET, path)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(&self.token.data)
            .query(query)
            .build()?;

        let response = self.transport.execute(request, cancel).await?;

        if response.status != StatusCode::OK {
            return Err(Error::Api {
                status: response.status,
                body: response.text(),
            });
        }

        Ok(response.body)
    }
}

#[async_trait]
impl BankingOperations for BankingService {
    #[instrument(name = "Fetching balance", skip_all, fields(date = %date))]
    async fn balance(&self, date: NaiveDate, cancel: &CancellationToken) -> Result<Balance> {
        let body = self
            .fetch(BALANCE_PATH, &[("dataSaldo", format_wire_date(date))], cancel)
            .await?;

        Ok(decode_balance(&body)?)
    }

    #[instrument(name = "Fetching statement", skip_all, fields(start = %start, end = %end))]
    async fn transactions(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        cancel: &CancellationToken,
    ) -> Result<Vec<Transaction>> {
        let query = [
            ("dataInicio", format_wire_date(start)),
            ("dataFim", format_wire_date(end)),
        ];
        let body = self.fetch(STATEMENT_PATH, &query, cancel).await?;

        let transactions = decode_transactions(&body)?;
        debug!(count = transactions.len(), "Statement decoded");

        Ok(transactions)
    }
}
