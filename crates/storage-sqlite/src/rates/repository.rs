use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{snapshot_for, RateDB, RateHistoryDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{rate_history, rates};
use cambio_core::errors::{Error, Result};
use cambio_core::rates::{
    NewRate, Rate, RateError, RateHistoryEntry, RateRepositoryTrait, RateUpdate,
};

pub struct RateRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RateRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl RateRepositoryTrait for RateRepository {
    fn get_by_id(&self, rate_id: &str) -> Result<Rate> {
        let mut conn = get_connection(&self.pool)?;
        let rate_db = rates::table
            .find(rate_id)
            .select(RateDB::as_select())
            .first::<RateDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::from(RateError::NotFound(rate_id.to_string()))
                }
                _ => StorageError::from(e).into(),
            })?;
        Ok(rate_db.into())
    }

    fn get_active_for_currency(&self, currency_code: &str) -> Result<Option<Rate>> {
        let mut conn = get_connection(&self.pool)?;
        let rate_db = rates::table
            .filter(rates::currency_code.eq(currency_code))
            .filter(rates::is_active.eq(true))
            .select(RateDB::as_select())
            .first::<RateDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(rate_db.map(Rate::from))
    }

    fn list_active(&self) -> Result<Vec<Rate>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = rates::table
            .filter(rates::is_active.eq(true))
            .order(rates::currency_code.asc())
            .select(RateDB::as_select())
            .load::<RateDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Rate::from).collect())
    }

    fn get_history(&self, rate_id: &str) -> Result<Vec<RateHistoryEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = rate_history::table
            .filter(rate_history::rate_id.eq(rate_id))
            .order(rate_history::changed_at.asc())
            .select(RateHistoryDB::as_select())
            .load::<RateHistoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(RateHistoryEntry::from).collect())
    }

    async fn create(&self, new_rate: NewRate) -> Result<Rate> {
        let now = Utc::now().naive_utc();
        let rate_db = RateDB {
            id: Uuid::new_v4().to_string(),
            currency_code: new_rate.currency_code,
            price: new_rate.price.to_string(),
            buy_commission: new_rate.buy_commission.to_string(),
            sell_commission: new_rate.sell_commission.to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.writer
            .exec(move |conn| {
                diesel::insert_into(rates::table)
                    .values(&rate_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                // The initial snapshot lands with the rate itself; a reader
                // never sees a rate without its audit trail.
                let rate: Rate = rate_db.into();
                diesel::insert_into(rate_history::table)
                    .values(&snapshot_for(&rate, now))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(rate)
            })
            .await
    }

    async fn update(&self, update: RateUpdate) -> Result<Rate> {
        self.writer
            .exec(move |conn| {
                let mut existing = rates::table
                    .find(&update.id)
                    .select(RateDB::as_select())
                    .first::<RateDB>(conn)
                    .map_err(|e| match e {
                        diesel::result::Error::NotFound => {
                            Error::from(RateError::NotFound(update.id.clone()))
                        }
                        _ => StorageError::from(e).into(),
                    })?;

                if let Some(price) = update.price {
                    existing.price = price.to_string();
                }
                if let Some(buy_commission) = update.buy_commission {
                    existing.buy_commission = buy_commission.to_string();
                }
                if let Some(sell_commission) = update.sell_commission {
                    existing.sell_commission = sell_commission.to_string();
                }
                let now = Utc::now().naive_utc();
                existing.updated_at = now;

                diesel::update(rates::table.find(&existing.id))
                    .set(&existing)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                // Snapshot in the same transaction as the mutation.
                let rate: Rate = existing.into();
                diesel::insert_into(rate_history::table)
                    .values(&snapshot_for(&rate, now))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(rate)
            })
            .await
    }

    async fn set_active(&self, rate_id: &str, active: bool) -> Result<Rate> {
        let rate_id = rate_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::update(rates::table.find(&rate_id))
                    .set((
                        rates::is_active.eq(active),
                        rates::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(RateError::NotFound(rate_id.clone()).into());
                }

                let rate_db = rates::table
                    .find(&rate_id)
                    .select(RateDB::as_select())
                    .first::<RateDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(rate_db.into())
            })
            .await
    }
}
