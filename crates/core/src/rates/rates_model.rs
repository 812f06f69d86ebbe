//! Rate quote domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// The live pricing record for one foreign currency: the market price against
/// the base currency plus the house's buy-side and sell-side commission
/// components. At most one rate per currency is active at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    pub id: String,
    pub currency_code: String,
    pub price: Decimal,
    pub buy_commission: Decimal,
    pub sell_commission: Decimal,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Rate {
    /// The undiscounted per-unit rate at which the house buys foreign cash.
    pub fn base_buy_rate(&self) -> Decimal {
        self.price - self.buy_commission
    }

    /// The undiscounted per-unit rate at which the house sells foreign cash.
    pub fn base_sell_rate(&self) -> Decimal {
        self.price + self.sell_commission
    }
}

/// Input model for publishing a new rate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRate {
    pub currency_code: String,
    pub price: Decimal,
    pub buy_commission: Decimal,
    pub sell_commission: Decimal,
}

impl NewRate {
    pub fn validate(&self) -> Result<()> {
        if self.price <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Rate price must be positive, got {}",
                self.price
            ))));
        }
        if self.buy_commission < Decimal::ZERO || self.sell_commission < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Commission components cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for mutating an existing rate's pricing fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateUpdate {
    pub id: String,
    pub price: Option<Decimal>,
    pub buy_commission: Option<Decimal>,
    pub sell_commission: Option<Decimal>,
}

impl RateUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(price) = self.price {
            if price <= Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Rate price must be positive, got {}",
                    price
                ))));
            }
        }
        for commission in [self.buy_commission, self.sell_commission].into_iter().flatten() {
            if commission < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Commission components cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }

    pub fn is_noop(&self) -> bool {
        self.price.is_none() && self.buy_commission.is_none() && self.sell_commission.is_none()
    }
}

/// One append-only audit snapshot, written in the same transaction as every
/// mutation of the rate it belongs to. Never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateHistoryEntry {
    pub id: String,
    pub rate_id: String,
    pub price: Decimal,
    pub buy_rate: Decimal,
    pub sell_rate: Decimal,
    pub changed_at: NaiveDateTime,
}
