use thiserror::Error;

/// Custom error type for exchange operations
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Invalid currency pair: {0}")]
    InvalidCurrencyPair(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(String),

    #[error("Cannot transition transaction from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Invalid operation data: {0}")]
    InvalidData(String),
}
