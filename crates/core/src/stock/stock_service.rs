use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::allocator;
use super::stock_errors::StockError;
use super::stock_model::{
    MovementStatus, MovementType, NewStockMovement, StockEffect, StockEntry, StockMovement,
    StockMovementDetail,
};
use super::stock_traits::{StockRepositoryTrait, StockServiceTrait};
use crate::currencies::CurrencyRepositoryTrait;
use crate::errors::{Error, Result, ValidationError};

/// The stock ledger. Every mutation of a stock entry in the system goes
/// through this service's movement primitives; nothing else writes stock.
pub struct StockService {
    repository: Arc<dyn StockRepositoryTrait>,
    currency_repository: Arc<dyn CurrencyRepositoryTrait>,
}

impl StockService {
    pub fn new(
        repository: Arc<dyn StockRepositoryTrait>,
        currency_repository: Arc<dyn CurrencyRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            currency_repository,
        }
    }

    /// Converts a monetary amount to whole face-value units. Physical cash
    /// moves in whole units of the smallest denomination, so fractional or
    /// negative amounts are rejected before any allocation work.
    fn integral_units(amount: Decimal) -> Result<i64> {
        if amount < Decimal::ZERO || !amount.fract().is_zero() {
            return Err(StockError::InvalidAmount(format!(
                "Cash amount must be a non-negative whole number of units, got {}",
                amount
            ))
            .into());
        }
        amount.to_i64().ok_or_else(|| {
            StockError::InvalidAmount(format!("Cash amount out of range: {}", amount)).into()
        })
    }

    /// Builds detail lines and effects for a movement whose lines the caller
    /// supplies, validating denomination ownership and the amount equality.
    fn plan_supplied_lines(
        &self,
        new_movement: &NewStockMovement,
        movement_id: &str,
    ) -> Result<(Decimal, Vec<StockMovementDetail>, Vec<StockEffect>)> {
        let lines = new_movement
            .lines
            .as_deref()
            .filter(|l| !l.is_empty())
            .ok_or_else(|| {
                Error::Validation(ValidationError::MissingField("lines".to_string()))
            })?;

        let denominations = self
            .currency_repository
            .list_denominations(&new_movement.currency_code, None)?;
        let face_values: HashMap<&str, i64> = denominations
            .iter()
            .map(|d| (d.id.as_str(), d.face_value))
            .collect();

        let mut computed = 0i64;
        let mut details = Vec::with_capacity(lines.len());
        for line in lines {
            if line.quantity <= 0 {
                return Err(StockError::InvalidData(format!(
                    "Detail quantity must be positive, got {}",
                    line.quantity
                ))
                .into());
            }
            let face_value = *face_values.get(line.denomination_id.as_str()).ok_or_else(|| {
                StockError::DenominationMismatch(format!(
                    "Denomination '{}' does not belong to currency '{}'",
                    line.denomination_id, new_movement.currency_code
                ))
            })?;
            computed += face_value * line.quantity;
            details.push(StockMovementDetail {
                id: Uuid::new_v4().to_string(),
                movement_id: movement_id.to_string(),
                denomination_id: line.denomination_id.clone(),
                quantity: line.quantity,
            });
        }

        let computed_amount = Decimal::from(computed);
        if let Some(stated) = new_movement.amount {
            if stated != computed_amount {
                return Err(StockError::AmountMismatch {
                    stated,
                    computed: computed_amount,
                }
                .into());
            }
        }

        let effects = Self::effects_for(
            new_movement.movement_type,
            &new_movement.location_id,
            &details,
        );
        Ok((computed_amount, details, effects))
    }

    /// Builds detail lines for an automatic payout by allocating against the
    /// terminal's current stock.
    fn plan_automatic_payout(
        &self,
        new_movement: &NewStockMovement,
        movement_id: &str,
    ) -> Result<(Decimal, Vec<StockMovementDetail>, Vec<StockEffect>)> {
        if new_movement.lines.is_some() {
            return Err(StockError::InvalidData(
                "Automatic payouts derive their detail lines; none may be supplied".to_string(),
            )
            .into());
        }
        let amount = new_movement.amount.ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("amount".to_string()))
        })?;
        let target = Self::integral_units(amount)?;

        let available = self
            .repository
            .get_available(&new_movement.location_id, &new_movement.currency_code)?;
        let allocation = allocator::allocate(target, &available)?;

        let details: Vec<StockMovementDetail> = allocation
            .iter()
            .map(|line| StockMovementDetail {
                id: Uuid::new_v4().to_string(),
                movement_id: movement_id.to_string(),
                denomination_id: line.denomination_id.clone(),
                quantity: line.quantity,
            })
            .collect();

        let effects = Self::effects_for(
            new_movement.movement_type,
            &new_movement.location_id,
            &details,
        );
        Ok((amount, details, effects))
    }

    /// Expands a movement's detail lines into the per-location stock effects
    /// dictated by its type.
    fn effects_for(
        movement_type: MovementType,
        location_id: &str,
        details: &[StockMovementDetail],
    ) -> Vec<StockEffect> {
        let flow = movement_type.cash_flow(location_id);
        let mut effects = Vec::new();
        for detail in details {
            if let Some(ref debit_location) = flow.debit {
                effects.push(StockEffect::debit(
                    debit_location,
                    &detail.denomination_id,
                    detail.quantity,
                ));
            }
            if let Some(ref credit_location) = flow.credit {
                effects.push(StockEffect::credit(
                    credit_location,
                    &detail.denomination_id,
                    detail.quantity,
                ));
            }
        }
        effects
    }
}

#[async_trait]
impl StockServiceTrait for StockService {
    fn get_stock(&self, location_id: &str) -> Result<Vec<StockEntry>> {
        self.repository.get_entries(location_id)
    }

    fn terminal_can_cover(
        &self,
        terminal_id: &str,
        currency_code: &str,
        amount: Decimal,
    ) -> Result<bool> {
        // A fractional or negative amount is simply not coverable in cash.
        let target = match Self::integral_units(amount) {
            Ok(target) => target,
            Err(_) => return Ok(false),
        };
        let available = self.repository.get_available(terminal_id, currency_code)?;
        Ok(allocator::can_cover(target, &available))
    }

    fn get_movement(&self, movement_id: &str) -> Result<StockMovement> {
        self.repository.get_movement(movement_id)
    }

    fn get_movement_for_transaction(&self, transaction_id: &str) -> Result<Option<StockMovement>> {
        self.repository.get_movement_by_transaction(transaction_id)
    }

    fn get_movement_details(&self, movement_id: &str) -> Result<Vec<StockMovementDetail>> {
        self.repository.get_movement_details(movement_id)
    }

    fn list_movements(&self, status_filter: Option<MovementStatus>) -> Result<Vec<StockMovement>> {
        self.repository.list_movements(status_filter)
    }

    async fn create_movement(&self, new_movement: NewStockMovement) -> Result<StockMovement> {
        let currency = self
            .currency_repository
            .get_by_code(&new_movement.currency_code)?;

        // Friendly early check; the repository re-validates inside the
        // creation transaction, where the partial unique index backs it up.
        if let Some(ref transaction_id) = new_movement.transaction_id {
            if let Some(existing) = self
                .repository
                .get_movement_by_transaction(transaction_id)?
            {
                if existing.status != MovementStatus::Cancelled {
                    return Err(StockError::DuplicateMovement(transaction_id.clone()).into());
                }
            }
        }

        let movement_id = Uuid::new_v4().to_string();
        let (amount, details, effects) = if new_movement.movement_type.details_are_derived() {
            self.plan_automatic_payout(&new_movement, &movement_id)?
        } else {
            self.plan_supplied_lines(&new_movement, &movement_id)?
        };

        debug!(
            "Creating {} movement of {} {} at {} ({} detail lines)",
            new_movement.movement_type,
            amount,
            currency.code,
            new_movement.location_id,
            details.len()
        );

        let now = Utc::now().naive_utc();
        let movement = StockMovement {
            id: movement_id,
            movement_type: new_movement.movement_type,
            location_id: new_movement.location_id,
            currency_code: new_movement.currency_code,
            amount,
            transaction_id: new_movement.transaction_id,
            status: MovementStatus::InProgress,
            created_at: now,
            updated_at: now,
        };

        self.repository
            .create_movement(movement, details, effects)
            .await
    }

    async fn finalize_movement(&self, movement_id: &str) -> Result<StockMovement> {
        let movement = self.repository.get_movement(movement_id)?;
        match movement.status {
            MovementStatus::Finalized => Ok(movement),
            MovementStatus::Cancelled => Err(StockError::InvalidStatusTransition {
                from: movement.status.to_string(),
                to: MovementStatus::Finalized.to_string(),
            }
            .into()),
            // Stock was already applied at creation; only the status moves.
            MovementStatus::InProgress => {
                self.repository
                    .transition_movement(movement_id, MovementStatus::Finalized, Vec::new())
                    .await
            }
        }
    }

    async fn cancel_movement(&self, movement_id: &str) -> Result<StockMovement> {
        let movement = self.repository.get_movement(movement_id)?;
        match movement.status {
            // Cancelling twice is a no-op; the restock must not run again.
            MovementStatus::Cancelled => Ok(movement),
            MovementStatus::Finalized => Err(StockError::InvalidStatusTransition {
                from: movement.status.to_string(),
                to: MovementStatus::Cancelled.to_string(),
            }
            .into()),
            MovementStatus::InProgress => {
                let details = self.repository.get_movement_details(movement_id)?;
                let restock: Vec<StockEffect> = Self::effects_for(
                    movement.movement_type,
                    &movement.location_id,
                    &details,
                )
                .iter()
                .map(StockEffect::inverse)
                .collect();

                self.repository
                    .transition_movement(movement_id, MovementStatus::Cancelled, restock)
                    .await
            }
        }
    }
}
