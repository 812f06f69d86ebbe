use thiserror::Error;

/// Custom error type for rate operations
#[derive(Debug, Error)]
pub enum RateError {
    #[error("No active rate for currency '{0}'")]
    RateNotFound(String),

    #[error("Rate not found: {0}")]
    NotFound(String),

    #[error("Currency '{0}' already has an active rate")]
    ActiveRateExists(String),

    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    #[error("Invalid rate data: {0}")]
    InvalidData(String),
}
