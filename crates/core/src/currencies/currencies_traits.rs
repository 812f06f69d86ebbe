use async_trait::async_trait;

use super::currencies_model::{Currency, CurrencyUpdate, Denomination, NewCurrency, NewDenomination};
use crate::errors::Result;

/// Trait defining the contract for currency catalog repository operations.
#[async_trait]
pub trait CurrencyRepositoryTrait: Send + Sync {
    fn get_by_code(&self, code: &str) -> Result<Currency>;
    fn get_base(&self) -> Result<Option<Currency>>;
    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<Currency>>;
    async fn create(&self, new_currency: NewCurrency) -> Result<Currency>;
    async fn update(&self, update: CurrencyUpdate) -> Result<Currency>;
    /// Moves the base flag to `code`, clearing it from the previous holder
    /// and mirroring the code into settings, all in one transaction.
    async fn set_base(&self, code: &str) -> Result<Currency>;

    fn get_denomination(&self, denomination_id: &str) -> Result<Denomination>;
    fn list_denominations(
        &self,
        currency_code: &str,
        is_active_filter: Option<bool>,
    ) -> Result<Vec<Denomination>>;
    async fn create_denomination(&self, new_denomination: NewDenomination) -> Result<Denomination>;
    async fn set_denomination_active(&self, denomination_id: &str, active: bool)
        -> Result<Denomination>;
}

/// Trait defining the contract for currency catalog service operations.
#[async_trait]
pub trait CurrencyServiceTrait: Send + Sync {
    fn get_currency(&self, code: &str) -> Result<Currency>;
    fn get_base_currency(&self) -> Result<Currency>;
    fn list_currencies(&self, is_active_filter: Option<bool>) -> Result<Vec<Currency>>;
    async fn create_currency(&self, new_currency: NewCurrency) -> Result<Currency>;
    async fn update_currency(&self, update: CurrencyUpdate) -> Result<Currency>;
    async fn set_base_currency(&self, code: &str) -> Result<Currency>;

    fn list_denominations(
        &self,
        currency_code: &str,
        is_active_filter: Option<bool>,
    ) -> Result<Vec<Denomination>>;
    async fn create_denomination(&self, new_denomination: NewDenomination) -> Result<Denomination>;
    async fn deactivate_denomination(&self, denomination_id: &str) -> Result<Denomination>;
}
