//! Database models for rates and their audit history.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::parse_decimal;
use cambio_core::rates::{Rate, RateHistoryEntry};

/// Database model for rates
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, Serialize, Deserialize, Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::rates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct RateDB {
    pub id: String,
    pub currency_code: String,
    pub price: String,
    pub buy_commission: String,
    pub sell_commission: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for rate history snapshots
#[derive(Queryable, Identifiable, Insertable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::rate_history)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct RateHistoryDB {
    pub id: String,
    pub rate_id: String,
    pub price: String,
    pub buy_rate: String,
    pub sell_rate: String,
    pub changed_at: NaiveDateTime,
}

impl From<RateDB> for Rate {
    fn from(db: RateDB) -> Self {
        Self {
            id: db.id,
            currency_code: db.currency_code,
            price: parse_decimal(&db.price, "price"),
            buy_commission: parse_decimal(&db.buy_commission, "buy_commission"),
            sell_commission: parse_decimal(&db.sell_commission, "sell_commission"),
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<RateHistoryDB> for RateHistoryEntry {
    fn from(db: RateHistoryDB) -> Self {
        Self {
            id: db.id,
            rate_id: db.rate_id,
            price: parse_decimal(&db.price, "price"),
            buy_rate: parse_decimal(&db.buy_rate, "buy_rate"),
            sell_rate: parse_decimal(&db.sell_rate, "sell_rate"),
            changed_at: db.changed_at,
        }
    }
}

/// Builds the history snapshot row for the current state of a rate.
pub fn snapshot_for(rate: &Rate, changed_at: NaiveDateTime) -> RateHistoryDB {
    RateHistoryDB {
        id: uuid::Uuid::new_v4().to_string(),
        rate_id: rate.id.clone(),
        price: rate.price.to_string(),
        buy_rate: rate.base_buy_rate().to_string(),
        sell_rate: rate.base_sell_rate().to_string(),
        changed_at,
    }
}
