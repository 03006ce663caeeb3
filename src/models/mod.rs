pub mod balance;
pub mod token;
pub mod transaction;

pub use balance::Balance;
pub use token::Token;
pub use transaction::{Transaction, TransactionOperation, TransactionType};
