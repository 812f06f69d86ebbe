use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{StockEntryDB, StockMovementDB, StockMovementDetailDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{denominations, stock_entries, stock_movement_details, stock_movements};
use cambio_core::errors::{Error, Result};
use cambio_core::stock::{
    DenominationStock, MovementStatus, StockEffect, StockEntry, StockError, StockMovement,
    StockMovementDetail, StockRepositoryTrait,
};

pub struct StockRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl StockRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    /// Applies one effect inside the caller's transaction. Credits upsert the
    /// entry; debits use the conditional update that refuses to go below
    /// zero, so a lost race surfaces as insufficient stock and rolls the
    /// whole job back.
    fn apply_effect(conn: &mut SqliteConnection, effect: &StockEffect) -> Result<()> {
        let now = Utc::now().naive_utc();

        if effect.delta > 0 {
            let affected = diesel::update(
                stock_entries::table
                    .filter(stock_entries::location_id.eq(&effect.location_id))
                    .filter(stock_entries::denomination_id.eq(&effect.denomination_id)),
            )
            .set((
                stock_entries::quantity.eq(stock_entries::quantity + effect.delta),
                stock_entries::updated_at.eq(now),
            ))
            .execute(conn)
            .map_err(StorageError::from)?;

            if affected == 0 {
                diesel::insert_into(stock_entries::table)
                    .values(&StockEntryDB {
                        id: Uuid::new_v4().to_string(),
                        location_id: effect.location_id.clone(),
                        denomination_id: effect.denomination_id.clone(),
                        quantity: effect.delta,
                        updated_at: now,
                    })
                    .execute(conn)
                    .map_err(StorageError::from)?;
            }
        } else if effect.delta < 0 {
            let debit = -effect.delta;
            let affected = diesel::update(
                stock_entries::table
                    .filter(stock_entries::location_id.eq(&effect.location_id))
                    .filter(stock_entries::denomination_id.eq(&effect.denomination_id))
                    .filter(stock_entries::quantity.ge(debit)),
            )
            .set((
                stock_entries::quantity.eq(stock_entries::quantity - debit),
                stock_entries::updated_at.eq(now),
            ))
            .execute(conn)
            .map_err(StorageError::from)?;

            if affected == 0 {
                return Err(StockError::InsufficientStock(format!(
                    "Location '{}' cannot cover {} units of denomination '{}'",
                    effect.location_id, debit, effect.denomination_id
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[async_trait]
impl StockRepositoryTrait for StockRepository {
    fn get_entries(&self, location_id: &str) -> Result<Vec<StockEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = stock_entries::table
            .filter(stock_entries::location_id.eq(location_id))
            .order(stock_entries::denomination_id.asc())
            .select(StockEntryDB::as_select())
            .load::<StockEntryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(StockEntry::from).collect())
    }

    fn get_available(
        &self,
        location_id: &str,
        currency_code: &str,
    ) -> Result<Vec<DenominationStock>> {
        let mut conn = get_connection(&self.pool)?;

        let rows: Vec<(String, i64, i64)> = stock_entries::table
            .inner_join(
                denominations::table
                    .on(denominations::id.eq(stock_entries::denomination_id)),
            )
            .filter(stock_entries::location_id.eq(location_id))
            .filter(denominations::currency_code.eq(currency_code))
            .filter(denominations::is_active.eq(true))
            .filter(stock_entries::quantity.gt(0))
            .order(denominations::face_value.desc())
            .select((
                stock_entries::denomination_id,
                denominations::face_value,
                stock_entries::quantity,
            ))
            .load::<(String, i64, i64)>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows
            .into_iter()
            .map(|(denomination_id, face_value, quantity)| DenominationStock {
                denomination_id,
                face_value,
                quantity,
            })
            .collect())
    }

    fn get_movement(&self, movement_id: &str) -> Result<StockMovement> {
        let mut conn = get_connection(&self.pool)?;
        let movement_db = stock_movements::table
            .find(movement_id)
            .select(StockMovementDB::as_select())
            .first::<StockMovementDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::from(StockError::MovementNotFound(movement_id.to_string()))
                }
                _ => StorageError::from(e).into(),
            })?;
        Ok(movement_db.into())
    }

    fn get_movement_by_transaction(&self, transaction_id: &str) -> Result<Option<StockMovement>> {
        let mut conn = get_connection(&self.pool)?;
        let movement_db = stock_movements::table
            .filter(stock_movements::transaction_id.eq(transaction_id))
            .filter(stock_movements::status.ne(MovementStatus::Cancelled.as_str()))
            .select(StockMovementDB::as_select())
            .first::<StockMovementDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(movement_db.map(StockMovement::from))
    }

    fn get_movement_details(&self, movement_id: &str) -> Result<Vec<StockMovementDetail>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = stock_movement_details::table
            .filter(stock_movement_details::movement_id.eq(movement_id))
            .select(StockMovementDetailDB::as_select())
            .load::<StockMovementDetailDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(StockMovementDetail::from).collect())
    }

    fn list_movements(&self, status_filter: Option<MovementStatus>) -> Result<Vec<StockMovement>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = stock_movements::table
            .select(StockMovementDB::as_select())
            .into_boxed();
        if let Some(status) = status_filter {
            query = query.filter(stock_movements::status.eq(status.as_str()));
        }

        let rows = query
            .order(stock_movements::created_at.desc())
            .load::<StockMovementDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(StockMovement::from).collect())
    }

    async fn create_movement(
        &self,
        movement: StockMovement,
        details: Vec<StockMovementDetail>,
        effects: Vec<StockEffect>,
    ) -> Result<StockMovement> {
        self.writer
            .exec(move |conn| {
                // Re-check inside the transaction; the partial unique index
                // is the last line of defense behind this.
                if let Some(ref transaction_id) = movement.transaction_id {
                    let existing: i64 = stock_movements::table
                        .filter(stock_movements::transaction_id.eq(transaction_id))
                        .filter(
                            stock_movements::status.ne(MovementStatus::Cancelled.as_str()),
                        )
                        .count()
                        .get_result(conn)
                        .map_err(StorageError::from)?;
                    if existing > 0 {
                        return Err(StockError::DuplicateMovement(transaction_id.clone()).into());
                    }
                }

                let movement_db = StockMovementDB::from(movement.clone());
                diesel::insert_into(stock_movements::table)
                    .values(&movement_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let detail_rows: Vec<StockMovementDetailDB> =
                    details.into_iter().map(StockMovementDetailDB::from).collect();
                if !detail_rows.is_empty() {
                    diesel::insert_into(stock_movement_details::table)
                        .values(&detail_rows)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }

                for effect in &effects {
                    Self::apply_effect(conn, effect)?;
                }

                Ok(movement)
            })
            .await
    }

    async fn transition_movement(
        &self,
        movement_id: &str,
        to: MovementStatus,
        effects: Vec<StockEffect>,
    ) -> Result<StockMovement> {
        let movement_id = movement_id.to_string();
        self.writer
            .exec(move |conn| {
                let movement_db = stock_movements::table
                    .find(&movement_id)
                    .select(StockMovementDB::as_select())
                    .first::<StockMovementDB>(conn)
                    .map_err(|e| match e {
                        diesel::result::Error::NotFound => {
                            Error::from(StockError::MovementNotFound(movement_id.clone()))
                        }
                        _ => StorageError::from(e).into(),
                    })?;
                let current = StockMovement::from(movement_db);

                // Double-cancellation is a no-op; the restock must not run
                // twice. Every other exit from a terminal state is an error.
                if current.status == to {
                    return Ok(current);
                }
                if current.status.is_terminal() {
                    return Err(StockError::InvalidStatusTransition {
                        from: current.status.to_string(),
                        to: to.to_string(),
                    }
                    .into());
                }

                let now = Utc::now().naive_utc();
                diesel::update(stock_movements::table.find(&current.id))
                    .set((
                        stock_movements::status.eq(to.as_str()),
                        stock_movements::updated_at.eq(now),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                for effect in &effects {
                    Self::apply_effect(conn, effect)?;
                }

                Ok(StockMovement {
                    status: to,
                    updated_at: now,
                    ..current
                })
            })
            .await
    }
}
