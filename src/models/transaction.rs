use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A statement entry. Entries have no identifier of their own; duplicates are
/// kept exactly as the provider returns them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    pub date: NaiveDate,
    #[serde(rename = "Type")]
    pub type_: TransactionType,
    pub operation: TransactionOperation,
    pub value: Decimal,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Pix,
    Payment,
    Transfer,
    /// The provider sent a category this client does not know about.
    Unknown,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionType::Pix => "pix",
            TransactionType::Payment => "payment",
            TransactionType::Transfer => "transfer",
            TransactionType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionOperation {
    Credit,
    Debit,
    /// Neither a credit nor a debit marker.
    Invalid,
}

impl fmt::Display for TransactionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionOperation::Credit => "credit",
            TransactionOperation::Debit => "debit",
            TransactionOperation::Invalid => "invalid",
        };
        f.write_str(name)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::dec;

    #[test]
    fn test_display_names() {
        assert_eq!(TransactionType::Pix.to_string(), "pix");
        assert_eq!(TransactionType::Payment.to_string(), "payment");
        assert_eq!(TransactionType::Transfer.to_string(), "transfer");
        assert_eq!(TransactionType::Unknown.to_string(), "unknown");
        assert_eq!(TransactionOperation::Credit.to_string(), "credit");
        assert_eq!(TransactionOperation::Debit.to_string(), "debit");
        assert_eq!(TransactionOperation::Invalid.to_string(), "invalid");
    }

    #[test]
    fn test_transaction_serialization() {
        let transaction = test_helpers::mock_transaction(
            "Coffee",
            dec!(-4.50),
            TransactionOperation::Debit,
            test_helpers::mock_date(2024, 11, 23),
        );
        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(json["Date"], "2024-11-23");
        assert_eq!(json["Type"], "Pix");
        assert_eq!(json["Operation"], "Debit");
        assert_eq!(json["Value"], "-4.50");
        assert_eq!(json["Title"], "Coffee");
    }
}
