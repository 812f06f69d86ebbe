//! Core error types for the exchange back office.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use thiserror::Error;

use crate::categories::CategoryError;
use crate::currencies::CurrencyError;
use crate::methods::MethodError;
use crate::operations::OperationError;
use crate::profit::ProfitError;
use crate::rates::RateError;
use crate::stock::StockError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the back office.
///
/// Database-specific errors are wrapped in string form to keep this type
/// database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Currency error: {0}")]
    Currency(#[from] CurrencyError),

    #[error("Client category error: {0}")]
    Category(#[from] CategoryError),

    #[error("Financial method error: {0}")]
    Method(#[from] MethodError),

    #[error("Rate error: {0}")]
    Rate(#[from] RateError),

    #[error("Operation error: {0}")]
    Operation(#[from] OperationError),

    #[error("Stock error: {0}")]
    Stock(#[from] StockError),

    #[error("Profit error: {0}")]
    Profit(#[from] ProfitError),
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    #[error("Database query failed: {0}")]
    QueryFailed(String),

    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    #[error("Record not found: {0}")]
    NotFound(String),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}
