use thiserror::Error;

/// Custom error type for client category operations
#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Client category not found: {0}")]
    NotFound(String),

    #[error("Invalid category data: {0}")]
    InvalidData(String),
}
