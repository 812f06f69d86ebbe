//! SQLite storage implementation for the cambio back office.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in `cambio-core`
//! and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the workspace where Diesel dependencies
//! exist; `cambio-core` is database-agnostic and works with traits.
//!
//! Every mutation runs as a job on the single-writer actor inside an
//! immediate transaction, so a multi-step stock movement either lands
//! completely or not at all.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod categories;
pub mod currencies;
pub mod methods;
pub mod operations;
pub mod profit;
pub mod rates;
pub mod settings;
pub mod stock;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from cambio-core for convenience
pub use cambio_core::errors::{DatabaseError, Error, Result};
