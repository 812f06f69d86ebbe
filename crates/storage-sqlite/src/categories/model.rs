//! Database models for client categories.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::parse_decimal;
use cambio_core::categories::ClientCategory;

/// Database model for client categories
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, Serialize, Deserialize, Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::client_categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ClientCategoryDB {
    pub id: String,
    pub name: String,
    pub discount_pct: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<ClientCategoryDB> for ClientCategory {
    fn from(db: ClientCategoryDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            discount_pct: parse_decimal(&db.discount_pct, "discount_pct"),
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
