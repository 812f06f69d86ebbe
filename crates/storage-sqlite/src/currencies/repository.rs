use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use super::model::{CurrencyDB, DenominationDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{currencies, denominations, settings};
use crate::settings::model::SettingDB;
use cambio_core::constants::BASE_CURRENCY_KEY;
use cambio_core::currencies::{
    Currency, CurrencyError, CurrencyRepositoryTrait, CurrencyUpdate, Denomination, NewCurrency,
    NewDenomination,
};
use cambio_core::errors::{Error, Result};

pub struct CurrencyRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CurrencyRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CurrencyRepositoryTrait for CurrencyRepository {
    fn get_by_code(&self, code: &str) -> Result<Currency> {
        let mut conn = get_connection(&self.pool)?;
        let currency_db = currencies::table
            .find(code)
            .select(CurrencyDB::as_select())
            .first::<CurrencyDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::from(CurrencyError::NotFound(code.to_string()))
                }
                _ => StorageError::from(e).into(),
            })?;
        Ok(currency_db.into())
    }

    fn get_base(&self) -> Result<Option<Currency>> {
        let mut conn = get_connection(&self.pool)?;
        let currency_db = currencies::table
            .filter(currencies::is_base.eq(true))
            .select(CurrencyDB::as_select())
            .first::<CurrencyDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(currency_db.map(Currency::from))
    }

    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<Currency>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = currencies::table
            .select(CurrencyDB::as_select())
            .into_boxed();
        if let Some(active) = is_active_filter {
            query = query.filter(currencies::is_active.eq(active));
        }

        let rows = query
            .order(currencies::code.asc())
            .load::<CurrencyDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Currency::from).collect())
    }

    async fn create(&self, new_currency: NewCurrency) -> Result<Currency> {
        let now = Utc::now().naive_utc();
        let currency_db = CurrencyDB {
            code: new_currency.code,
            name: new_currency.name,
            symbol: new_currency.symbol,
            decimal_places: new_currency.decimal_places,
            is_base: new_currency.is_base,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.writer
            .exec(move |conn| {
                diesel::insert_into(currencies::table)
                    .values(&currency_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                if currency_db.is_base {
                    diesel::replace_into(settings::table)
                        .values(&SettingDB {
                            setting_key: BASE_CURRENCY_KEY.to_string(),
                            setting_value: currency_db.code.clone(),
                        })
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }

                Ok(currency_db.into())
            })
            .await
    }

    async fn update(&self, update: CurrencyUpdate) -> Result<Currency> {
        self.writer
            .exec(move |conn| {
                let mut existing = currencies::table
                    .find(&update.code)
                    .select(CurrencyDB::as_select())
                    .first::<CurrencyDB>(conn)
                    .map_err(|e| match e {
                        diesel::result::Error::NotFound => {
                            Error::from(CurrencyError::NotFound(update.code.clone()))
                        }
                        _ => StorageError::from(e).into(),
                    })?;

                if let Some(name) = update.name {
                    existing.name = name;
                }
                if let Some(symbol) = update.symbol {
                    existing.symbol = symbol;
                }
                if let Some(active) = update.is_active {
                    existing.is_active = active;
                }
                existing.updated_at = Utc::now().naive_utc();

                diesel::update(currencies::table.find(&existing.code))
                    .set(&existing)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(existing.into())
            })
            .await
    }

    async fn set_base(&self, code: &str) -> Result<Currency> {
        let code = code.to_string();
        self.writer
            .exec(move |conn| {
                let now = Utc::now().naive_utc();

                // Clearing the old flag first keeps the partial unique index
                // satisfied throughout the transaction.
                diesel::update(currencies::table.filter(currencies::is_base.eq(true)))
                    .set((currencies::is_base.eq(false), currencies::updated_at.eq(now)))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let affected =
                    diesel::update(currencies::table.find(&code))
                        .set((currencies::is_base.eq(true), currencies::updated_at.eq(now)))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(CurrencyError::NotFound(code.clone()).into());
                }

                diesel::replace_into(settings::table)
                    .values(&SettingDB {
                        setting_key: BASE_CURRENCY_KEY.to_string(),
                        setting_value: code.clone(),
                    })
                    .execute(conn)
                    .map_err(StorageError::from)?;

                let currency_db = currencies::table
                    .find(&code)
                    .select(CurrencyDB::as_select())
                    .first::<CurrencyDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(currency_db.into())
            })
            .await
    }

    fn get_denomination(&self, denomination_id: &str) -> Result<Denomination> {
        let mut conn = get_connection(&self.pool)?;
        let denomination_db = denominations::table
            .find(denomination_id)
            .select(DenominationDB::as_select())
            .first::<DenominationDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::from(CurrencyError::DenominationNotFound(denomination_id.to_string()))
                }
                _ => StorageError::from(e).into(),
            })?;
        Ok(denomination_db.into())
    }

    fn list_denominations(
        &self,
        currency_code: &str,
        is_active_filter: Option<bool>,
    ) -> Result<Vec<Denomination>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = denominations::table
            .filter(denominations::currency_code.eq(currency_code))
            .into_boxed();
        if let Some(active) = is_active_filter {
            query = query.filter(denominations::is_active.eq(active));
        }

        let rows = query
            .order(denominations::face_value.desc())
            .select(DenominationDB::as_select())
            .load::<DenominationDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(Denomination::from).collect())
    }

    async fn create_denomination(&self, new_denomination: NewDenomination) -> Result<Denomination> {
        let denomination_db = DenominationDB {
            id: Uuid::new_v4().to_string(),
            currency_code: new_denomination.currency_code,
            face_value: new_denomination.face_value,
            is_active: true,
            created_at: Utc::now().naive_utc(),
        };

        self.writer
            .exec(move |conn| {
                diesel::insert_into(denominations::table)
                    .values(&denomination_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(denomination_db.into())
            })
            .await
    }

    async fn set_denomination_active(
        &self,
        denomination_id: &str,
        active: bool,
    ) -> Result<Denomination> {
        let denomination_id = denomination_id.to_string();
        self.writer
            .exec(move |conn| {
                let affected = diesel::update(denominations::table.find(&denomination_id))
                    .set(denominations::is_active.eq(active))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(CurrencyError::DenominationNotFound(denomination_id.clone()).into());
                }

                let denomination_db = denominations::table
                    .find(&denomination_id)
                    .select(DenominationDB::as_select())
                    .first::<DenominationDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(denomination_db.into())
            })
            .await
    }
}
