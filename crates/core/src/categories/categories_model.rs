//! Client category domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// A client tier (retail, wholesale, VIP, ...) carrying the discount applied
/// to commission components of that client's operations. Categories are
/// referenced by many clients and are never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCategory {
    pub id: String,
    pub name: String,
    pub discount_pct: Decimal,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a client category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClientCategory {
    pub name: String,
    pub discount_pct: Decimal,
}

impl NewClientCategory {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        validate_discount(self.discount_pct)
    }
}

/// Input model for updating a client category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCategoryUpdate {
    pub id: String,
    pub name: Option<String>,
    pub discount_pct: Option<Decimal>,
    pub is_active: Option<bool>,
}

impl ClientCategoryUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(discount) = self.discount_pct {
            validate_discount(discount)?;
        }
        Ok(())
    }
}

fn validate_discount(discount_pct: Decimal) -> Result<()> {
    if discount_pct < Decimal::ZERO || discount_pct > Decimal::ONE_HUNDRED {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Discount percentage must be between 0 and 100, got {}",
            discount_pct
        ))));
    }
    Ok(())
}
