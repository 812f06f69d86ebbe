use thiserror::Error;

/// Custom error type for profit operations
#[derive(Debug, Error)]
pub enum ProfitError {
    #[error("Profit already recorded for transaction '{0}'")]
    AlreadyRecorded(String),

    #[error("Profit record not found: {0}")]
    NotFound(String),

    #[error("Invalid profit data: {0}")]
    InvalidData(String),
}
