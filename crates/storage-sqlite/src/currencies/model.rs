//! Database models for the currency catalog.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use cambio_core::currencies::{Currency, Denomination};

/// Database model for currencies
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, Serialize, Deserialize, Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::currencies)]
#[diesel(primary_key(code))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct CurrencyDB {
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub decimal_places: i32,
    pub is_base: bool,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for denominations
#[derive(
    Queryable, Identifiable, Insertable, Selectable, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::denominations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct DenominationDB {
    pub id: String,
    pub currency_code: String,
    pub face_value: i64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<CurrencyDB> for Currency {
    fn from(db: CurrencyDB) -> Self {
        Self {
            code: db.code,
            name: db.name,
            symbol: db.symbol,
            decimal_places: db.decimal_places,
            is_base: db.is_base,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Currency> for CurrencyDB {
    fn from(domain: Currency) -> Self {
        Self {
            code: domain.code,
            name: domain.name,
            symbol: domain.symbol,
            decimal_places: domain.decimal_places,
            is_base: domain.is_base,
            is_active: domain.is_active,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}

impl From<DenominationDB> for Denomination {
    fn from(db: DenominationDB) -> Self {
        Self {
            id: db.id,
            currency_code: db.currency_code,
            face_value: db.face_value,
            is_active: db.is_active,
            created_at: db.created_at,
        }
    }
}
