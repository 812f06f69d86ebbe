//! Database models for the stock ledger.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::parse_decimal;
use cambio_core::stock::{
    MovementStatus, MovementType, StockEntry, StockMovement, StockMovementDetail,
};

/// Database model for stock entries
#[derive(Queryable, Identifiable, Insertable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::stock_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct StockEntryDB {
    pub id: String,
    pub location_id: String,
    pub denomination_id: String,
    pub quantity: i64,
    pub updated_at: NaiveDateTime,
}

/// Database model for stock movements
#[derive(Queryable, Identifiable, Insertable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::stock_movements)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct StockMovementDB {
    pub id: String,
    pub movement_type: String,
    pub location_id: String,
    pub currency_code: String,
    pub amount: String,
    pub transaction_id: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for stock movement detail lines
#[derive(Queryable, Identifiable, Insertable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::stock_movement_details)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct StockMovementDetailDB {
    pub id: String,
    pub movement_id: String,
    pub denomination_id: String,
    pub quantity: i64,
}

impl From<StockEntryDB> for StockEntry {
    fn from(db: StockEntryDB) -> Self {
        Self {
            id: db.id,
            location_id: db.location_id,
            denomination_id: db.denomination_id,
            quantity: db.quantity,
            updated_at: db.updated_at,
        }
    }
}

impl From<StockMovementDB> for StockMovement {
    fn from(db: StockMovementDB) -> Self {
        let movement_type = MovementType::from_str_loose(&db.movement_type).unwrap_or_else(|| {
            log::error!(
                "Unknown movement type '{}' on movement {}",
                db.movement_type,
                db.id
            );
            MovementType::ClientDeposit
        });
        let status = MovementStatus::from_str_loose(&db.status).unwrap_or_else(|| {
            log::error!("Unknown movement status '{}' on movement {}", db.status, db.id);
            MovementStatus::InProgress
        });
        Self {
            id: db.id,
            movement_type,
            location_id: db.location_id,
            currency_code: db.currency_code,
            amount: parse_decimal(&db.amount, "amount"),
            transaction_id: db.transaction_id,
            status,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<StockMovement> for StockMovementDB {
    fn from(domain: StockMovement) -> Self {
        Self {
            id: domain.id,
            movement_type: domain.movement_type.as_str().to_string(),
            location_id: domain.location_id,
            currency_code: domain.currency_code,
            amount: domain.amount.to_string(),
            transaction_id: domain.transaction_id,
            status: domain.status.as_str().to_string(),
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}

impl From<StockMovementDetailDB> for StockMovementDetail {
    fn from(db: StockMovementDetailDB) -> Self {
        Self {
            id: db.id,
            movement_id: db.movement_id,
            denomination_id: db.denomination_id,
            quantity: db.quantity,
        }
    }
}

impl From<StockMovementDetail> for StockMovementDetailDB {
    fn from(domain: StockMovementDetail) -> Self {
        Self {
            id: domain.id,
            movement_id: domain.movement_id,
            denomination_id: domain.denomination_id,
            quantity: domain.quantity,
        }
    }
}
