//! Database models for profit records.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::parse_decimal;
use cambio_core::profit::Profit;

/// Database model for profit records
#[derive(Queryable, Identifiable, Insertable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::profits)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ProfitDB {
    pub id: String,
    pub transaction_id: String,
    pub net_profit: String,
    pub market_rate: String,
    pub applied_rate: String,
    pub foreign_amount: String,
    pub currency_code: String,
    pub method_kind: Option<String>,
    pub year: i32,
    pub month: i32,
    pub created_at: NaiveDateTime,
}

impl From<ProfitDB> for Profit {
    fn from(db: ProfitDB) -> Self {
        Self {
            id: db.id,
            transaction_id: db.transaction_id,
            net_profit: parse_decimal(&db.net_profit, "net_profit"),
            market_rate: parse_decimal(&db.market_rate, "market_rate"),
            applied_rate: parse_decimal(&db.applied_rate, "applied_rate"),
            foreign_amount: parse_decimal(&db.foreign_amount, "foreign_amount"),
            currency_code: db.currency_code,
            method_kind: db.method_kind,
            year: db.year,
            month: db.month,
            created_at: db.created_at,
        }
    }
}
