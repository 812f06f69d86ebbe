use thiserror::Error;

/// Custom error type for financial method operations
#[derive(Debug, Error)]
pub enum MethodError {
    #[error("Financial method not found: {0}")]
    NotFound(String),

    #[error("Financial method detail not found: {0}")]
    DetailNotFound(String),

    #[error("Financial method unavailable: {0}")]
    MethodUnavailable(String),

    #[error("Invalid method data: {0}")]
    InvalidData(String),
}
