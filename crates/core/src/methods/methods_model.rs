//! Financial method domain models.
//!
//! A `FinancialMethod` is a generic payment or collection channel (bank
//! transfer, digital wallet, card, cash, check). A `FinancialMethodDetail`
//! is a concrete client- or house-owned instance of one (a specific bank
//! account, a wallet handle, a card). Details may override the method's
//! default commission percentage.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// The payment/collection channel family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MethodKind {
    BankTransfer,
    DigitalWallet,
    Card,
    Cash,
    Check,
}

impl MethodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodKind::BankTransfer => "BANK_TRANSFER",
            MethodKind::DigitalWallet => "DIGITAL_WALLET",
            MethodKind::Card => "CARD",
            MethodKind::Cash => "CASH",
            MethodKind::Check => "CHECK",
        }
    }

    pub fn from_str_loose(value: &str) -> Option<Self> {
        match value {
            "BANK_TRANSFER" => Some(MethodKind::BankTransfer),
            "DIGITAL_WALLET" => Some(MethodKind::DigitalWallet),
            "CARD" => Some(MethodKind::Card),
            "CASH" => Some(MethodKind::Cash),
            "CHECK" => Some(MethodKind::Check),
            _ => None,
        }
    }
}

/// How a detail ended up inactive. A cascade deactivation (parent method
/// deactivated) is tagged so that a non-admin cannot casually reverse it and
/// so that reactivating the parent restores exactly the details it switched
/// off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeactivationKind {
    #[default]
    None,
    Direct,
    Cascade,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMethod {
    pub id: String,
    pub name: String,
    pub kind: MethodKind,
    pub commission_pct: Decimal,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFinancialMethod {
    pub name: String,
    pub kind: MethodKind,
    pub commission_pct: Decimal,
}

impl NewFinancialMethod {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        validate_commission(self.commission_pct)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMethodDetail {
    pub id: String,
    pub method_id: String,
    pub owner: String,
    pub label: String,
    /// Overrides the method commission when set.
    pub commission_pct: Option<Decimal>,
    pub is_active: bool,
    pub deactivation: DeactivationKind,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl FinancialMethodDetail {
    /// The commission percentage in effect for this detail.
    pub fn effective_commission(&self, method: &FinancialMethod) -> Decimal {
        self.commission_pct.unwrap_or(method.commission_pct)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFinancialMethodDetail {
    pub method_id: String,
    pub owner: String,
    pub label: String,
    pub commission_pct: Option<Decimal>,
}

impl NewFinancialMethodDetail {
    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "label".to_string(),
            )));
        }
        if let Some(commission) = self.commission_pct {
            validate_commission(commission)?;
        }
        Ok(())
    }
}

fn validate_commission(commission_pct: Decimal) -> Result<()> {
    if commission_pct < Decimal::ZERO || commission_pct > Decimal::ONE_HUNDRED {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Commission percentage must be between 0 and 100, got {}",
            commission_pct
        ))));
    }
    Ok(())
}
