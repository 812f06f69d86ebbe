use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::rates_errors::RateError;
use super::rates_model::{NewRate, Rate, RateHistoryEntry, RateUpdate};
use super::rates_traits::{RateRepositoryTrait, RateServiceTrait};
use crate::currencies::CurrencyRepositoryTrait;
use crate::errors::Result;

/// Service for managing rate quotes and their audit history.
///
/// At most one active rate per currency: enforced here as a business rule
/// (deactivation/reactivation is an operator action), in addition to the
/// storage constraint.
pub struct RateService {
    repository: Arc<dyn RateRepositoryTrait>,
    currency_repository: Arc<dyn CurrencyRepositoryTrait>,
}

impl RateService {
    pub fn new(
        repository: Arc<dyn RateRepositoryTrait>,
        currency_repository: Arc<dyn CurrencyRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            currency_repository,
        }
    }
}

#[async_trait]
impl RateServiceTrait for RateService {
    fn get_active_rate(&self, currency_code: &str) -> Result<Rate> {
        self.repository
            .get_active_for_currency(currency_code)?
            .ok_or_else(|| RateError::RateNotFound(currency_code.to_string()).into())
    }

    fn list_active_rates(&self) -> Result<Vec<Rate>> {
        self.repository.list_active()
    }

    fn get_rate_history(&self, rate_id: &str) -> Result<Vec<RateHistoryEntry>> {
        self.repository.get_history(rate_id)
    }

    async fn create_rate(&self, new_rate: NewRate) -> Result<Rate> {
        new_rate.validate()?;

        let currency = self.currency_repository.get_by_code(&new_rate.currency_code)?;
        if currency.is_base {
            return Err(RateError::InvalidData(format!(
                "Base currency '{}' is not quoted against itself",
                currency.code
            ))
            .into());
        }
        if !currency.is_active {
            return Err(RateError::InvalidData(format!(
                "Currency '{}' is inactive",
                currency.code
            ))
            .into());
        }

        if let Some(existing) = self
            .repository
            .get_active_for_currency(&new_rate.currency_code)?
        {
            debug!(
                "Rejecting rate for {}: active rate {} exists",
                new_rate.currency_code, existing.id
            );
            return Err(RateError::ActiveRateExists(new_rate.currency_code).into());
        }

        self.repository.create(new_rate).await
    }

    async fn update_rate(&self, update: RateUpdate) -> Result<Rate> {
        update.validate()?;
        if update.is_noop() {
            return self.repository.get_by_id(&update.id);
        }
        self.repository.update(update).await
    }

    async fn deactivate_rate(&self, rate_id: &str) -> Result<Rate> {
        self.repository.set_active(rate_id, false).await
    }

    async fn activate_rate(&self, rate_id: &str) -> Result<Rate> {
        let rate = self.repository.get_by_id(rate_id)?;
        if rate.is_active {
            return Ok(rate);
        }

        if let Some(existing) = self
            .repository
            .get_active_for_currency(&rate.currency_code)?
        {
            if existing.id != rate.id {
                return Err(RateError::ActiveRateExists(rate.currency_code).into());
            }
        }

        self.repository.set_active(rate_id, true).await
    }
}
