//! Translation between the provider's wire payloads and the domain model.
//!
//! Dates and amounts must parse or the whole payload is rejected. Categorical
//! fields are looked up in fixed tables and fall back to a sentinel on a miss.

use super::types::{InterBalance, InterTransaction, StatementResponse, TokenResponse};
use crate::error::{AuthError, ParseError};
use crate::models::{Balance, Token, Transaction, TransactionOperation, TransactionType};
use chrono::{DateTime, Duration, NaiveDate, SubsecRound, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

const TRANSACTION_TYPES: &[(&str, TransactionType)] = &[
    ("PIX", TransactionType::Pix),
    ("PAGAMENTO", TransactionType::Payment),
    ("TRANSFERENCIA", TransactionType::Transfer),
];

const TRANSACTION_OPERATIONS: &[(&str, TransactionOperation)] = &[
    ("C", TransactionOperation::Credit),
    ("D", TransactionOperation::Debit),
];

fn lookup<T: Copy>(table: &[(&str, T)], code: &str) -> Option<T> {
    table
        .iter()
        .find(|(wire, _)| *wire == code)
        .map(|(_, value)| *value)
}

impl TransactionType {
    /// Case-sensitive; anything outside the table is `Unknown`.
    pub fn from_wire(code: &str) -> Self {
        lookup(TRANSACTION_TYPES, code).unwrap_or(TransactionType::Unknown)
    }
}

impl TransactionOperation {
    /// Case-sensitive; anything but `C` or `D` is `Invalid`.
    pub fn from_wire(code: &str) -> Self {
        lookup(TRANSACTION_OPERATIONS, code).unwrap_or(TransactionOperation::Invalid)
    }
}

/// Format a date the way query parameters expect it.
pub fn format_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

pub fn parse_wire_date(value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value, WIRE_DATE_FORMAT).map_err(|source| ParseError::Date {
        value: value.to_string(),
        source,
    })
}

/// Plain decimal or scientific notation. Digit separators are rejected.
pub fn parse_wire_amount(value: &str) -> Result<Decimal, ParseError> {
    let parsed = match value.contains('_') {
        true => Err(rust_decimal::Error::from("digit separators are not allowed")),
        false => Decimal::from_str(value),
    };

    parsed.map_err(|source| ParseError::Amount {
        value: value.to_string(),
        source,
    })
}

impl From<InterBalance> for Balance {
    fn from(inter: InterBalance) -> Self {
        Balance {
            available: inter.available,
            limit: inter.limit,
            check_on_hold: inter.check_on_hold,
            judicially_blocked: inter.judicially_blocked,
            administratively_blocked: inter.administratively_blocked,
        }
    }
}

impl TryFrom<InterTransaction> for Transaction {
    type Error = ParseError;

    fn try_from(inter: InterTransaction) -> Result<Self, Self::Error> {
        Ok(Transaction {
            date: parse_wire_date(&inter.date)?,
            type_: TransactionType::from_wire(&inter.transaction_type),
            operation: TransactionOperation::from_wire(&inter.operation),
            value: parse_wire_amount(&inter.value)?,
            title: inter.title.trim().to_string(),
            description: inter.description.trim().to_string(),
        })
    }
}

impl TokenResponse {
    pub(crate) fn into_token(self, issued_at: DateTime<Utc>) -> Result<Token, AuthError> {
        let expires_at = Duration::try_seconds(self.expires_in)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .ok_or(AuthError::InvalidExpiry(self.expires_in))?;

        Ok(Token {
            data: self.access_token,
            token_type: self.token_type,
            expires_at: expires_at.trunc_subsecs(0),
            scopes: self
                .scope
                .split(' ')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

/// No range checks; negative or otherwise surprising values are kept.
pub fn decode_balance(body: &[u8]) -> Result<Balance, ParseError> {
    let inter: InterBalance = serde_json::from_slice(body)?;
    Ok(inter.into())
}

/// All-or-nothing: the first entry with a bad date or amount fails the whole statement.
pub fn decode_transactions(body: &[u8]) -> Result<Vec<Transaction>, ParseError> {
    let statement: StatementResponse = serde_json::from_slice(body)?;

    statement
        .transactions
        .into_iter()
        .map(Transaction::try_from)
        .collect()
}
