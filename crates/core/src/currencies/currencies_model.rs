//! Currency and denomination domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// A tradable unit of money. Exactly one currency system-wide carries the
/// `is_base` flag; every operation prices a foreign currency against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub decimal_places: i32,
    pub is_base: bool,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for registering a new currency
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCurrency {
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub decimal_places: i32,
    pub is_base: bool,
}

impl NewCurrency {
    pub fn validate(&self) -> Result<()> {
        if self.code.len() != 3 || !self.code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Currency code must be three uppercase letters, got '{}'",
                self.code
            ))));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.decimal_places < 0 || self.decimal_places > 8 {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Decimal places out of range: {}",
                self.decimal_places
            ))));
        }
        Ok(())
    }
}

/// Input model for updating an existing currency
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyUpdate {
    pub code: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub is_active: Option<bool>,
}

/// A fixed face value of physical currency (a note or coin) belonging to one
/// currency. Immutable once referenced by stock or movement records;
/// deactivation is logical, never deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Denomination {
    pub id: String,
    pub currency_code: String,
    pub face_value: i64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Input model for registering a new denomination
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDenomination {
    pub currency_code: String,
    pub face_value: i64,
}

impl NewDenomination {
    pub fn validate(&self) -> Result<()> {
        if self.face_value <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Denomination face value must be positive, got {}",
                self.face_value
            ))));
        }
        Ok(())
    }
}
