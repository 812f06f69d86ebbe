//! Direction resolution for a currency pair.

use super::operations_errors::OperationError;
use super::operations_model::{OperationDirection, OperationSides};
use crate::currencies::Currency;

/// Resolves the trade direction for a pair of currencies.
///
/// Exactly one of the two must be the base currency. Base-to-foreign means
/// the client buys foreign cash (the house sells); foreign-to-base means the
/// client sells it (the house buys).
pub fn resolve_direction(
    origin: &Currency,
    destination: &Currency,
) -> Result<OperationSides, OperationError> {
    match (origin.is_base, destination.is_base) {
        (true, false) => Ok(OperationSides::from_client(OperationDirection::Buy)),
        (false, true) => Ok(OperationSides::from_client(OperationDirection::Sell)),
        (true, true) => Err(OperationError::InvalidCurrencyPair(format!(
            "Both {} and {} are the base currency",
            origin.code, destination.code
        ))),
        (false, false) => Err(OperationError::InvalidCurrencyPair(format!(
            "Neither {} nor {} is the base currency",
            origin.code, destination.code
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn currency(code: &str, is_base: bool) -> Currency {
        Currency {
            code: code.to_string(),
            name: code.to_string(),
            symbol: code.to_string(),
            decimal_places: 2,
            is_base,
            is_active: true,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_base_to_foreign_is_client_buy() {
        let sides = resolve_direction(&currency("PYG", true), &currency("USD", false)).unwrap();
        assert_eq!(sides.client, OperationDirection::Buy);
        assert_eq!(sides.house, OperationDirection::Sell);
    }

    #[test]
    fn test_foreign_to_base_is_client_sell() {
        let sides = resolve_direction(&currency("USD", false), &currency("PYG", true)).unwrap();
        assert_eq!(sides.client, OperationDirection::Sell);
        assert_eq!(sides.house, OperationDirection::Buy);
    }

    #[test]
    fn test_two_foreign_currencies_are_rejected() {
        let result = resolve_direction(&currency("EUR", false), &currency("USD", false));
        assert!(matches!(result, Err(OperationError::InvalidCurrencyPair(_))));
    }

    #[test]
    fn test_two_base_currencies_are_rejected() {
        let result = resolve_direction(&currency("PYG", true), &currency("PYG", true));
        assert!(matches!(result, Err(OperationError::InvalidCurrencyPair(_))));
    }

    #[test]
    fn test_sides_always_mirror() {
        let sides = resolve_direction(&currency("PYG", true), &currency("USD", false)).unwrap();
        assert_eq!(sides.client.mirror(), sides.house);
    }
}
