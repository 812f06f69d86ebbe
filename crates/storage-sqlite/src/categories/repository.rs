use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use super::model::ClientCategoryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::client_categories;
use cambio_core::categories::{
    CategoryError, CategoryRepositoryTrait, ClientCategory, ClientCategoryUpdate,
    NewClientCategory,
};
use cambio_core::errors::{Error, Result};

pub struct CategoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    fn get_by_id(&self, category_id: &str) -> Result<ClientCategory> {
        let mut conn = get_connection(&self.pool)?;
        let category_db = client_categories::table
            .find(category_id)
            .select(ClientCategoryDB::as_select())
            .first::<ClientCategoryDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    Error::from(CategoryError::NotFound(category_id.to_string()))
                }
                _ => StorageError::from(e).into(),
            })?;
        Ok(category_db.into())
    }

    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<ClientCategory>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = client_categories::table
            .select(ClientCategoryDB::as_select())
            .into_boxed();
        if let Some(active) = is_active_filter {
            query = query.filter(client_categories::is_active.eq(active));
        }

        let rows = query
            .order(client_categories::name.asc())
            .load::<ClientCategoryDB>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(ClientCategory::from).collect())
    }

    async fn create(&self, new_category: NewClientCategory) -> Result<ClientCategory> {
        let now = Utc::now().naive_utc();
        let category_db = ClientCategoryDB {
            id: Uuid::new_v4().to_string(),
            name: new_category.name,
            discount_pct: new_category.discount_pct.to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.writer
            .exec(move |conn| {
                diesel::insert_into(client_categories::table)
                    .values(&category_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(category_db.into())
            })
            .await
    }

    async fn update(&self, update: ClientCategoryUpdate) -> Result<ClientCategory> {
        self.writer
            .exec(move |conn| {
                let mut existing = client_categories::table
                    .find(&update.id)
                    .select(ClientCategoryDB::as_select())
                    .first::<ClientCategoryDB>(conn)
                    .map_err(|e| match e {
                        diesel::result::Error::NotFound => {
                            Error::from(CategoryError::NotFound(update.id.clone()))
                        }
                        _ => StorageError::from(e).into(),
                    })?;

                if let Some(name) = update.name {
                    existing.name = name;
                }
                if let Some(discount) = update.discount_pct {
                    existing.discount_pct = discount.to_string();
                }
                if let Some(active) = update.is_active {
                    existing.is_active = active;
                }
                existing.updated_at = Utc::now().naive_utc();

                diesel::update(client_categories::table.find(&existing.id))
                    .set(&existing)
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(existing.into())
            })
            .await
    }
}
