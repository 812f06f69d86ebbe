//! Database models for financial methods.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::parse_decimal;
use cambio_core::methods::{
    DeactivationKind, FinancialMethod, FinancialMethodDetail, MethodKind,
};

/// Database model for financial methods
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, Serialize, Deserialize, Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::financial_methods)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct FinancialMethodDB {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub commission_pct: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for financial method details
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, Serialize, Deserialize, Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::financial_method_details)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct FinancialMethodDetailDB {
    pub id: String,
    pub method_id: String,
    pub owner: String,
    pub label: String,
    pub commission_pct: Option<String>,
    pub is_active: bool,
    pub deactivation: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn parse_deactivation(value: &str) -> DeactivationKind {
    match value {
        "DIRECT" => DeactivationKind::Direct,
        "CASCADE" => DeactivationKind::Cascade,
        _ => DeactivationKind::None,
    }
}

pub fn deactivation_as_str(kind: DeactivationKind) -> &'static str {
    match kind {
        DeactivationKind::None => "NONE",
        DeactivationKind::Direct => "DIRECT",
        DeactivationKind::Cascade => "CASCADE",
    }
}

impl From<FinancialMethodDB> for FinancialMethod {
    fn from(db: FinancialMethodDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            // An unknown kind means a schema drifted under us; treat as cash,
            // the most restrictive channel.
            kind: MethodKind::from_str_loose(&db.kind).unwrap_or(MethodKind::Cash),
            commission_pct: parse_decimal(&db.commission_pct, "commission_pct"),
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<FinancialMethodDetailDB> for FinancialMethodDetail {
    fn from(db: FinancialMethodDetailDB) -> Self {
        Self {
            id: db.id,
            method_id: db.method_id,
            owner: db.owner,
            label: db.label,
            commission_pct: db
                .commission_pct
                .as_deref()
                .map(|v| parse_decimal(v, "commission_pct")),
            is_active: db.is_active,
            deactivation: parse_deactivation(&db.deactivation),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
