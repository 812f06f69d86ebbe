use async_trait::async_trait;
use chrono::Datelike;
use log::warn;
use std::sync::Arc;

use super::profit_calculator;
use super::profit_errors::ProfitError;
use super::profit_model::{NewProfit, Profit};
use super::profit_traits::{ProfitRepositoryTrait, ProfitServiceTrait};
use crate::errors::Result;
use crate::methods::MethodRepositoryTrait;
use crate::operations::{Transaction, TransactionStatus};

/// Service recording the derived profit of completed transactions.
pub struct ProfitService {
    repository: Arc<dyn ProfitRepositoryTrait>,
    method_repository: Arc<dyn MethodRepositoryTrait>,
}

impl ProfitService {
    pub fn new(
        repository: Arc<dyn ProfitRepositoryTrait>,
        method_repository: Arc<dyn MethodRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            method_repository,
        }
    }

    /// Classification label for reporting. Resolution failures do not block
    /// the profit record; the label is simply absent.
    fn method_kind_for(&self, transaction: &Transaction) -> Option<String> {
        let detail_id = transaction.method_detail_id.as_deref()?;
        let detail = match self.method_repository.get_detail(detail_id) {
            Ok(detail) => detail,
            Err(e) => {
                warn!(
                    "Could not resolve method detail {} for transaction {}: {}",
                    detail_id, transaction.id, e
                );
                return None;
            }
        };
        match self.method_repository.get_method(&detail.method_id) {
            Ok(method) => Some(method.kind.as_str().to_string()),
            Err(e) => {
                warn!(
                    "Could not resolve method {} for transaction {}: {}",
                    detail.method_id, transaction.id, e
                );
                None
            }
        }
    }
}

#[async_trait]
impl ProfitServiceTrait for ProfitService {
    fn get_profit_for_transaction(&self, transaction_id: &str) -> Result<Option<Profit>> {
        self.repository.get_by_transaction(transaction_id)
    }

    async fn record_for_transaction(&self, transaction: &Transaction) -> Result<Profit> {
        if transaction.status != TransactionStatus::Completed {
            return Err(ProfitError::InvalidData(format!(
                "Transaction {} is not completed",
                transaction.id
            ))
            .into());
        }

        if self.repository.get_by_transaction(&transaction.id)?.is_some() {
            return Err(ProfitError::AlreadyRecorded(transaction.id.clone()).into());
        }

        let net_profit = profit_calculator::net_profit(
            transaction.house_side,
            transaction.market_rate,
            transaction.applied_rate,
            transaction.foreign_amount(),
        );

        let completed_on = transaction.updated_at.date();
        self.repository
            .create(NewProfit {
                transaction_id: transaction.id.clone(),
                net_profit,
                market_rate: transaction.market_rate,
                applied_rate: transaction.applied_rate,
                foreign_amount: transaction.foreign_amount(),
                currency_code: transaction.foreign_currency_code().to_string(),
                method_kind: self.method_kind_for(transaction),
                year: completed_on.year(),
                month: completed_on.month() as i32,
            })
            .await
    }
}
