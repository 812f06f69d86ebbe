use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use super::model::ProfitDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::profits;
use cambio_core::errors::Result;
use cambio_core::profit::{NewProfit, Profit, ProfitError, ProfitRepositoryTrait};

pub struct ProfitRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProfitRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ProfitRepositoryTrait for ProfitRepository {
    fn get_by_transaction(&self, transaction_id: &str) -> Result<Option<Profit>> {
        let mut conn = get_connection(&self.pool)?;
        let profit_db = profits::table
            .filter(profits::transaction_id.eq(transaction_id))
            .select(ProfitDB::as_select())
            .first::<ProfitDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(profit_db.map(Profit::from))
    }

    async fn create(&self, new_profit: NewProfit) -> Result<Profit> {
        let profit_db = ProfitDB {
            id: Uuid::new_v4().to_string(),
            transaction_id: new_profit.transaction_id,
            net_profit: new_profit.net_profit.to_string(),
            market_rate: new_profit.market_rate.to_string(),
            applied_rate: new_profit.applied_rate.to_string(),
            foreign_amount: new_profit.foreign_amount.to_string(),
            currency_code: new_profit.currency_code,
            method_kind: new_profit.method_kind,
            year: new_profit.year,
            month: new_profit.month,
            created_at: Utc::now().naive_utc(),
        };

        self.writer
            .exec(move |conn| {
                // The unique constraint on transaction_id backs the
                // one-record-per-transaction guarantee.
                let existing: i64 = profits::table
                    .filter(profits::transaction_id.eq(&profit_db.transaction_id))
                    .count()
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                if existing > 0 {
                    return Err(
                        ProfitError::AlreadyRecorded(profit_db.transaction_id.clone()).into()
                    );
                }

                diesel::insert_into(profits::table)
                    .values(&profit_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(profit_db.into())
            })
            .await
    }
}
