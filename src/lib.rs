//! Client library for the Banco Inter banking API.
//!
//! Calls go over mutual TLS with a client certificate. A [`Token`] is obtained once
//! with [`TokenAuthenticator::authorize`] and then handed to a [`BankingService`],
//! which fetches balances and statements and decodes them into [`models`] values.

pub mod error;
pub mod inter;
pub mod models;

pub use error::{AuthError, Error, ParseError, Result, TransportError};
pub use inter::{
    BankingOperations, BankingService, ClientCertificate, ClientConfig, Environment,
    SecureTransport, TokenAuthenticator,
};
pub use models::{Balance, Token, Transaction, TransactionOperation, TransactionType};
pub use tokio_util::sync::CancellationToken;
