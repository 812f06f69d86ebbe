use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::operations_errors::OperationError;
use super::operations_model::{
    NewTransaction, OperationDirection, OperationQuote, OperationRequest, QuoteParameters,
    Transaction, TransactionEvent, TransactionStatus,
};
use super::operations_traits::{OperationServiceTrait, TransactionRepositoryTrait};
use super::resolver;
use crate::categories::CategoryRepositoryTrait;
use crate::currencies::CurrencyRepositoryTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::methods::MethodServiceTrait;
use crate::profit::ProfitServiceTrait;
use crate::rates::{self, RateServiceTrait};
use crate::stock::{MovementStatus, MovementType, NewStockMovement, StockServiceTrait};

/// Orchestrates exchange operations: pricing, the transaction store, and the
/// stock/profit reactions to transaction lifecycle events.
pub struct OperationService {
    currency_repository: Arc<dyn CurrencyRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
    rate_service: Arc<dyn RateServiceTrait>,
    method_service: Arc<dyn MethodServiceTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    stock_service: Arc<dyn StockServiceTrait>,
    profit_service: Arc<dyn ProfitServiceTrait>,
}

impl OperationService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        currency_repository: Arc<dyn CurrencyRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
        rate_service: Arc<dyn RateServiceTrait>,
        method_service: Arc<dyn MethodServiceTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        stock_service: Arc<dyn StockServiceTrait>,
        profit_service: Arc<dyn ProfitServiceTrait>,
    ) -> Self {
        Self {
            currency_repository,
            category_repository,
            rate_service,
            method_service,
            transaction_repository,
            stock_service,
            profit_service,
        }
    }

    fn discount_for(&self, client_category_id: Option<&str>) -> Result<Decimal> {
        match client_category_id {
            None => Ok(Decimal::ZERO),
            Some(category_id) => {
                let category = self.category_repository.get_by_id(category_id)?;
                if !category.is_active {
                    return Err(OperationError::InvalidData(format!(
                        "Client category '{}' is inactive",
                        category.name
                    ))
                    .into());
                }
                Ok(category.discount_pct)
            }
        }
    }

    async fn reserve_stock(&self, transaction: &Transaction, terminal_id: &str) -> Result<()> {
        // Only a house-sell operation hands foreign cash to the client; a
        // house-buy collects it, which is recorded when the deposit arrives.
        if transaction.house_side != OperationDirection::Sell {
            return Ok(());
        }

        debug!(
            "Reserving {} {} at terminal {} for transaction {}",
            transaction.destination_amount,
            transaction.destination_currency,
            terminal_id,
            transaction.id
        );

        self.stock_service
            .create_movement(NewStockMovement {
                movement_type: MovementType::ClientWithdrawal,
                location_id: terminal_id.to_string(),
                currency_code: transaction.destination_currency.clone(),
                amount: Some(transaction.destination_amount),
                lines: None,
                transaction_id: Some(transaction.id.clone()),
            })
            .await?;
        Ok(())
    }

    async fn settle_stock(&self, transaction: &Transaction, cancel: bool) -> Result<()> {
        let movement = self
            .stock_service
            .get_movement_for_transaction(&transaction.id)?;

        if let Some(movement) = movement {
            if movement.status == MovementStatus::InProgress {
                if cancel {
                    self.stock_service.cancel_movement(&movement.id).await?;
                } else {
                    self.stock_service.finalize_movement(&movement.id).await?;
                }
            }
        }
        Ok(())
    }

    fn guard_transition(
        transaction: &Transaction,
        to: TransactionStatus,
    ) -> Result<Option<Transaction>> {
        if transaction.status == to {
            // Repeated delivery of the same lifecycle event is a no-op.
            return Ok(Some(transaction.clone()));
        }
        if transaction.status.is_terminal() {
            return Err(OperationError::InvalidStatusTransition {
                from: transaction.status.to_string(),
                to: to.to_string(),
            }
            .into());
        }
        Ok(None)
    }
}

#[async_trait]
impl OperationServiceTrait for OperationService {
    fn compute_operation(&self, request: &OperationRequest) -> Result<OperationQuote> {
        if request.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Operation amount must be positive, got {}",
                request.amount
            ))));
        }

        let origin = self.currency_repository.get_by_code(&request.origin_currency)?;
        let destination = self
            .currency_repository
            .get_by_code(&request.destination_currency)?;

        let sides = resolver::resolve_direction(&origin, &destination)?;
        let foreign_code = match sides.house {
            OperationDirection::Buy => &origin.code,
            OperationDirection::Sell => &destination.code,
        };

        let rate = self.rate_service.get_active_rate(foreign_code)?;

        let method_commission_pct = match request.method_detail_id.as_deref() {
            Some(detail_id) => self.method_service.resolve_commission(detail_id)?,
            None => Decimal::ZERO,
        };
        let discount_pct = self.discount_for(request.client_category_id.as_deref())?;

        let (commission_base, applied_rate, destination_amount) = match sides.house {
            OperationDirection::Buy => {
                let applied = rates::house_buy_rate(
                    rate.price,
                    rate.buy_commission,
                    method_commission_pct,
                    discount_pct,
                )?;
                let converted = rates::convert_for_house_buy(request.amount, applied);
                (rate.buy_commission, applied, converted)
            }
            OperationDirection::Sell => {
                let applied = rates::house_sell_rate(
                    rate.price,
                    rate.sell_commission,
                    method_commission_pct,
                    discount_pct,
                )?;
                let converted = rates::convert_for_house_sell(request.amount, applied)?;
                (rate.sell_commission, applied, converted)
            }
        };

        // The only rounding in the whole calculation: the presented figures.
        Ok(OperationQuote {
            direction: sides,
            origin_code: origin.code,
            destination_code: destination.code,
            applied_rate: rates::round_rate(applied_rate),
            origin_amount: rates::round_amount(request.amount),
            destination_amount: rates::round_amount(destination_amount),
            parameters: QuoteParameters {
                price: rate.price,
                commission_base,
                method_commission_pct,
                discount_pct,
            },
        })
    }

    fn get_transaction(&self, transaction_id: &str) -> Result<Transaction> {
        self.transaction_repository.get_by_id(transaction_id)
    }

    fn list_transactions(
        &self,
        status_filter: Option<TransactionStatus>,
    ) -> Result<Vec<Transaction>> {
        self.transaction_repository.list(status_filter)
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        if new_transaction.client_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "clientId".to_string(),
            )));
        }

        let quote = self.compute_operation(&OperationRequest {
            origin_currency: new_transaction.origin_currency.clone(),
            destination_currency: new_transaction.destination_currency.clone(),
            amount: new_transaction.origin_amount,
            method_detail_id: new_transaction.method_detail_id.clone(),
            client_category_id: new_transaction.client_category_id.clone(),
        })?;

        let now = Utc::now().naive_utc();
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            client_id: new_transaction.client_id,
            house_side: quote.direction.house,
            origin_currency: quote.origin_code,
            destination_currency: quote.destination_code,
            origin_amount: quote.origin_amount,
            destination_amount: quote.destination_amount,
            market_rate: quote.parameters.price,
            applied_rate: quote.applied_rate,
            method_detail_id: new_transaction.method_detail_id,
            status: TransactionStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.transaction_repository.create(transaction).await
    }

    async fn handle_transaction_event(&self, event: TransactionEvent) -> Result<Transaction> {
        let transaction = self
            .transaction_repository
            .get_by_id(event.transaction_id())?;

        match event {
            TransactionEvent::Created { terminal_id, .. } => {
                if let Some(unchanged) =
                    Self::guard_transition(&transaction, TransactionStatus::InProgress)?
                {
                    return Ok(unchanged);
                }
                self.reserve_stock(&transaction, &terminal_id).await?;
                self.transaction_repository
                    .update_status(&transaction.id, TransactionStatus::InProgress)
                    .await
            }
            TransactionEvent::Completed { .. } => {
                if let Some(unchanged) =
                    Self::guard_transition(&transaction, TransactionStatus::Completed)?
                {
                    return Ok(unchanged);
                }
                self.settle_stock(&transaction, false).await?;
                let completed = self
                    .transaction_repository
                    .update_status(&transaction.id, TransactionStatus::Completed)
                    .await?;
                self.profit_service.record_for_transaction(&completed).await?;
                Ok(completed)
            }
            TransactionEvent::Cancelled { .. } => {
                if let Some(unchanged) =
                    Self::guard_transition(&transaction, TransactionStatus::Cancelled)?
                {
                    return Ok(unchanged);
                }
                self.settle_stock(&transaction, true).await?;
                self.transaction_repository
                    .update_status(&transaction.id, TransactionStatus::Cancelled)
                    .await
            }
            TransactionEvent::Failed { .. } => {
                if let Some(unchanged) =
                    Self::guard_transition(&transaction, TransactionStatus::Failed)?
                {
                    return Ok(unchanged);
                }
                self.settle_stock(&transaction, true).await?;
                self.transaction_repository
                    .update_status(&transaction.id, TransactionStatus::Failed)
                    .await
            }
        }
    }
}
