use rust_decimal::Decimal;
use thiserror::Error;

/// Custom error type for stock ledger operations
#[derive(Debug, Error)]
pub enum StockError {
    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    #[error("Transaction '{0}' already has a stock movement")]
    DuplicateMovement(String),

    #[error("Denomination mismatch: {0}")]
    DenominationMismatch(String),

    #[error("Detail lines sum to {computed}, movement states {stated}")]
    AmountMismatch { stated: Decimal, computed: Decimal },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Stock movement not found: {0}")]
    MovementNotFound(String),

    #[error("Cannot transition movement from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Invalid movement data: {0}")]
    InvalidData(String),
}
