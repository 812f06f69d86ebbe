use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::currencies_errors::CurrencyError;
use super::currencies_model::{Currency, CurrencyUpdate, Denomination, NewCurrency, NewDenomination};
use super::currencies_traits::{CurrencyRepositoryTrait, CurrencyServiceTrait};
use crate::errors::Result;

/// Service for managing the currency and denomination catalog.
///
/// The single-base-currency invariant is enforced here on every write, not
/// only by the storage constraint: a second base currency is rejected before
/// it reaches the repository.
pub struct CurrencyService {
    repository: Arc<dyn CurrencyRepositoryTrait>,
}

impl CurrencyService {
    pub fn new(repository: Arc<dyn CurrencyRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CurrencyServiceTrait for CurrencyService {
    fn get_currency(&self, code: &str) -> Result<Currency> {
        self.repository.get_by_code(code)
    }

    fn get_base_currency(&self) -> Result<Currency> {
        self.repository
            .get_base()?
            .ok_or_else(|| CurrencyError::NotFound("no base currency configured".to_string()).into())
    }

    fn list_currencies(&self, is_active_filter: Option<bool>) -> Result<Vec<Currency>> {
        self.repository.list(is_active_filter)
    }

    async fn create_currency(&self, new_currency: NewCurrency) -> Result<Currency> {
        new_currency.validate()?;

        if self.repository.get_by_code(&new_currency.code).is_ok() {
            return Err(CurrencyError::AlreadyExists(new_currency.code).into());
        }

        if new_currency.is_base {
            if let Some(existing) = self.repository.get_base()? {
                return Err(CurrencyError::BaseAlreadySet(existing.code).into());
            }
        }

        debug!("Registering currency {}", new_currency.code);
        self.repository.create(new_currency).await
    }

    async fn update_currency(&self, update: CurrencyUpdate) -> Result<Currency> {
        let existing = self.repository.get_by_code(&update.code)?;

        // The base currency cannot be deactivated while it holds the flag.
        if existing.is_base && update.is_active == Some(false) {
            return Err(CurrencyError::InvalidData(format!(
                "Cannot deactivate base currency '{}'",
                existing.code
            ))
            .into());
        }

        self.repository.update(update).await
    }

    async fn set_base_currency(&self, code: &str) -> Result<Currency> {
        let currency = self.repository.get_by_code(code)?;
        if !currency.is_active {
            return Err(CurrencyError::InvalidData(format!(
                "Cannot make inactive currency '{}' the base",
                code
            ))
            .into());
        }
        if currency.is_base {
            return Ok(currency);
        }

        debug!("Moving base currency flag to {}", code);
        self.repository.set_base(code).await
    }

    fn list_denominations(
        &self,
        currency_code: &str,
        is_active_filter: Option<bool>,
    ) -> Result<Vec<Denomination>> {
        self.repository
            .list_denominations(currency_code, is_active_filter)
    }

    async fn create_denomination(&self, new_denomination: NewDenomination) -> Result<Denomination> {
        new_denomination.validate()?;

        let currency = self.repository.get_by_code(&new_denomination.currency_code)?;

        let siblings = self
            .repository
            .list_denominations(&currency.code, None)?;
        if siblings
            .iter()
            .any(|d| d.face_value == new_denomination.face_value)
        {
            return Err(CurrencyError::DenominationAlreadyExists {
                currency_code: currency.code,
                face_value: new_denomination.face_value,
            }
            .into());
        }

        self.repository.create_denomination(new_denomination).await
    }

    async fn deactivate_denomination(&self, denomination_id: &str) -> Result<Denomination> {
        // Historical movements keep referencing the row; only the flag moves.
        self.repository
            .set_denomination_active(denomination_id, false)
            .await
    }
}
