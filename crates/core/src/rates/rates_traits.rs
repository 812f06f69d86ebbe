use async_trait::async_trait;

use super::rates_model::{NewRate, Rate, RateHistoryEntry, RateUpdate};
use crate::errors::Result;

/// Trait defining the contract for rate repository operations.
///
/// Every mutation of a rate's pricing fields appends a history snapshot in
/// the same transaction; implementations must never write one without the
/// other.
#[async_trait]
pub trait RateRepositoryTrait: Send + Sync {
    fn get_by_id(&self, rate_id: &str) -> Result<Rate>;
    fn get_active_for_currency(&self, currency_code: &str) -> Result<Option<Rate>>;
    fn list_active(&self) -> Result<Vec<Rate>>;
    fn get_history(&self, rate_id: &str) -> Result<Vec<RateHistoryEntry>>;
    async fn create(&self, new_rate: NewRate) -> Result<Rate>;
    async fn update(&self, update: RateUpdate) -> Result<Rate>;
    async fn set_active(&self, rate_id: &str, active: bool) -> Result<Rate>;
}

/// Trait defining the contract for rate service operations.
#[async_trait]
pub trait RateServiceTrait: Send + Sync {
    fn get_active_rate(&self, currency_code: &str) -> Result<Rate>;
    fn list_active_rates(&self) -> Result<Vec<Rate>>;
    fn get_rate_history(&self, rate_id: &str) -> Result<Vec<RateHistoryEntry>>;
    async fn create_rate(&self, new_rate: NewRate) -> Result<Rate>;
    async fn update_rate(&self, update: RateUpdate) -> Result<Rate>;
    async fn deactivate_rate(&self, rate_id: &str) -> Result<Rate>;
    async fn activate_rate(&self, rate_id: &str) -> Result<Rate>;
}
