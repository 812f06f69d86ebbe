use async_trait::async_trait;
use rust_decimal::Decimal;

use super::stock_model::{
    DenominationStock, MovementStatus, NewStockMovement, StockEffect, StockEntry, StockMovement,
    StockMovementDetail,
};
use crate::errors::Result;

/// Trait defining the contract for stock repository operations.
///
/// Implementations apply an effect list atomically: every effect in one
/// transaction, credits as get-or-create upserts, debits through a
/// conditional update that fails the whole transaction when stock would go
/// negative.
#[async_trait]
pub trait StockRepositoryTrait: Send + Sync {
    fn get_entries(&self, location_id: &str) -> Result<Vec<StockEntry>>;
    fn get_available(&self, location_id: &str, currency_code: &str)
        -> Result<Vec<DenominationStock>>;
    fn get_movement(&self, movement_id: &str) -> Result<StockMovement>;
    fn get_movement_by_transaction(&self, transaction_id: &str) -> Result<Option<StockMovement>>;
    fn get_movement_details(&self, movement_id: &str) -> Result<Vec<StockMovementDetail>>;
    fn list_movements(&self, status_filter: Option<MovementStatus>) -> Result<Vec<StockMovement>>;

    /// Inserts the movement and its detail lines and applies the stock
    /// effects, all in one transaction.
    async fn create_movement(
        &self,
        movement: StockMovement,
        details: Vec<StockMovementDetail>,
        effects: Vec<StockEffect>,
    ) -> Result<StockMovement>;

    /// Transitions the movement's status and applies the given effects in the
    /// same transaction. The transition is re-validated against the current
    /// status inside the transaction; an already-cancelled movement is
    /// returned unchanged when cancelling again.
    async fn transition_movement(
        &self,
        movement_id: &str,
        to: MovementStatus,
        effects: Vec<StockEffect>,
    ) -> Result<StockMovement>;
}

/// Trait defining the contract for stock ledger service operations.
#[async_trait]
pub trait StockServiceTrait: Send + Sync {
    fn get_stock(&self, location_id: &str) -> Result<Vec<StockEntry>>;
    fn terminal_can_cover(
        &self,
        terminal_id: &str,
        currency_code: &str,
        amount: Decimal,
    ) -> Result<bool>;
    fn get_movement(&self, movement_id: &str) -> Result<StockMovement>;
    fn get_movement_for_transaction(&self, transaction_id: &str) -> Result<Option<StockMovement>>;
    fn get_movement_details(&self, movement_id: &str) -> Result<Vec<StockMovementDetail>>;
    fn list_movements(&self, status_filter: Option<MovementStatus>) -> Result<Vec<StockMovement>>;
    async fn create_movement(&self, new_movement: NewStockMovement) -> Result<StockMovement>;
    async fn finalize_movement(&self, movement_id: &str) -> Result<StockMovement>;
    async fn cancel_movement(&self, movement_id: &str) -> Result<StockMovement>;
}
