//! Conversion helpers shared by the storage models.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a decimal stored as TEXT. Storage rows are written exclusively by
/// this crate, so a parse failure means corruption; it is logged and read as
/// zero rather than poisoning the whole result set.
pub fn parse_decimal(value: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value) {
        Ok(d) => d,
        Err(e) => {
            log::error!(
                "Failed to parse stored decimal {} '{}': {}. Falling back to ZERO.",
                field_name,
                value,
                e
            );
            Decimal::ZERO
        }
    }
}
