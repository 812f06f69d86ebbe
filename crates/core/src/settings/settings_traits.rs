//! Repository and service traits for settings.

use async_trait::async_trait;

use crate::errors::Result;

/// Repository trait for the key/value settings store.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a single setting value by key. Returns None if not set.
    fn get_setting(&self, setting_key: &str) -> Result<Option<String>>;

    /// Insert or replace a single setting.
    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()>;
}

/// Service trait for configuration reads used across the back office.
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_base_currency(&self) -> Result<Option<String>>;

    async fn update_base_currency(&self, new_base_currency: &str) -> Result<()>;

    fn get_setting_value(&self, key: &str) -> Result<Option<String>>;

    async fn set_setting_value(&self, key: &str, value: &str) -> Result<()>;
}
