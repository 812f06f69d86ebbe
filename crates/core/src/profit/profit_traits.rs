use async_trait::async_trait;

use super::profit_model::{NewProfit, Profit};
use crate::errors::Result;
use crate::operations::Transaction;

/// Trait defining the contract for profit repository operations.
#[async_trait]
pub trait ProfitRepositoryTrait: Send + Sync {
    fn get_by_transaction(&self, transaction_id: &str) -> Result<Option<Profit>>;
    async fn create(&self, new_profit: NewProfit) -> Result<Profit>;
}

/// Trait defining the contract for profit service operations.
#[async_trait]
pub trait ProfitServiceTrait: Send + Sync {
    fn get_profit_for_transaction(&self, transaction_id: &str) -> Result<Option<Profit>>;

    /// Records the profit of a completed transaction. Exactly one record per
    /// transaction: a second invocation fails instead of duplicating.
    async fn record_for_transaction(&self, transaction: &Transaction) -> Result<Profit>;
}
