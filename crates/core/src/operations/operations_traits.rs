use async_trait::async_trait;

use super::operations_model::{
    NewTransaction, OperationQuote, OperationRequest, Transaction, TransactionEvent,
    TransactionStatus,
};
use crate::errors::Result;

/// Trait defining the contract for transaction repository operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    fn get_by_id(&self, transaction_id: &str) -> Result<Transaction>;
    fn list(&self, status_filter: Option<TransactionStatus>) -> Result<Vec<Transaction>>;
    async fn create(&self, transaction: Transaction) -> Result<Transaction>;
    async fn update_status(
        &self,
        transaction_id: &str,
        status: TransactionStatus,
    ) -> Result<Transaction>;
}

/// Trait defining the contract for exchange operation service operations.
#[async_trait]
pub trait OperationServiceTrait: Send + Sync {
    /// Prices an operation without side effects.
    fn compute_operation(&self, request: &OperationRequest) -> Result<OperationQuote>;

    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction>;
    fn list_transactions(
        &self,
        status_filter: Option<TransactionStatus>,
    ) -> Result<Vec<Transaction>>;

    /// Prices and persists a new transaction in the pending state. Stock is
    /// not touched until the created event arrives.
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Reacts to an externally notified transaction state change: reserves,
    /// finalizes or releases stock and records profit on completion.
    async fn handle_transaction_event(&self, event: TransactionEvent) -> Result<Transaction>;
}
