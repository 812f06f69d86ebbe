//! Database models for transactions.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::parse_decimal;
use cambio_core::operations::{OperationDirection, Transaction, TransactionStatus};

/// Database model for transactions
#[derive(Queryable, Identifiable, Insertable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct TransactionDB {
    pub id: String,
    pub client_id: String,
    pub house_side: String,
    pub origin_currency: String,
    pub destination_currency: String,
    pub origin_amount: String,
    pub destination_amount: String,
    pub market_rate: String,
    pub applied_rate: String,
    pub method_detail_id: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<TransactionDB> for Transaction {
    fn from(db: TransactionDB) -> Self {
        let house_side = OperationDirection::from_str_loose(&db.house_side).unwrap_or_else(|| {
            log::error!("Unknown house side '{}' on transaction {}", db.house_side, db.id);
            OperationDirection::Buy
        });
        let status = TransactionStatus::from_str_loose(&db.status).unwrap_or_else(|| {
            log::error!("Unknown status '{}' on transaction {}", db.status, db.id);
            TransactionStatus::Pending
        });
        Self {
            id: db.id,
            client_id: db.client_id,
            house_side,
            origin_currency: db.origin_currency,
            destination_currency: db.destination_currency,
            origin_amount: parse_decimal(&db.origin_amount, "origin_amount"),
            destination_amount: parse_decimal(&db.destination_amount, "destination_amount"),
            market_rate: parse_decimal(&db.market_rate, "market_rate"),
            applied_rate: parse_decimal(&db.applied_rate, "applied_rate"),
            method_detail_id: db.method_detail_id,
            status,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Transaction> for TransactionDB {
    fn from(domain: Transaction) -> Self {
        Self {
            id: domain.id,
            client_id: domain.client_id,
            house_side: domain.house_side.as_str().to_string(),
            origin_currency: domain.origin_currency,
            destination_currency: domain.destination_currency,
            origin_amount: domain.origin_amount.to_string(),
            destination_amount: domain.destination_amount.to_string(),
            market_rate: domain.market_rate.to_string(),
            applied_rate: domain.applied_rate.to_string(),
            method_detail_id: domain.method_detail_id,
            status: domain.status.as_str().to_string(),
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
