use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::constants::BASE_CURRENCY_KEY;
use crate::currencies::CurrencyRepositoryTrait;
use crate::errors::Result;

/// Service for configuration values shared across the back office.
///
/// The base currency read here mirrors the `is_base` flag on the currency
/// catalog; writes are validated against the catalog so the two can never
/// drift through this path.
pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
    currency_repository: Arc<dyn CurrencyRepositoryTrait>,
}

impl SettingsService {
    pub fn new(
        settings_repository: Arc<dyn SettingsRepositoryTrait>,
        currency_repository: Arc<dyn CurrencyRepositoryTrait>,
    ) -> Self {
        Self {
            settings_repository,
            currency_repository,
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_base_currency(&self) -> Result<Option<String>> {
        if let Some(code) = self.settings_repository.get_setting(BASE_CURRENCY_KEY)? {
            return Ok(Some(code));
        }
        // Fall back to the catalog flag when the setting was never written.
        Ok(self.currency_repository.get_base()?.map(|c| c.code))
    }

    async fn update_base_currency(&self, new_base_currency: &str) -> Result<()> {
        // Validates existence and moves the catalog flag; the repository
        // mirrors the settings key in the same transaction.
        debug!("Updating base currency to {}", new_base_currency);
        self.currency_repository.set_base(new_base_currency).await?;
        Ok(())
    }

    fn get_setting_value(&self, key: &str) -> Result<Option<String>> {
        self.settings_repository.get_setting(key)
    }

    async fn set_setting_value(&self, key: &str, value: &str) -> Result<()> {
        self.settings_repository.update_setting(key, value).await
    }
}
