use thiserror::Error;

/// Custom error type for currency catalog operations
#[derive(Debug, Error)]
pub enum CurrencyError {
    #[error("Currency not found: {0}")]
    NotFound(String),

    #[error("Currency '{0}' already exists")]
    AlreadyExists(String),

    #[error("A base currency is already configured: {0}")]
    BaseAlreadySet(String),

    #[error("Currency '{0}' is not the base currency")]
    NotBase(String),

    #[error("Denomination not found: {0}")]
    DenominationNotFound(String),

    #[error("Denomination {face_value} already exists for currency '{currency_code}'")]
    DenominationAlreadyExists {
        currency_code: String,
        face_value: i64,
    },

    #[error("Invalid currency data: {0}")]
    InvalidData(String),
}
