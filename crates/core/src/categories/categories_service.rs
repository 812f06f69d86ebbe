use async_trait::async_trait;
use std::sync::Arc;

use super::categories_model::{ClientCategory, ClientCategoryUpdate, NewClientCategory};
use super::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::Result;

/// Service for managing client categories.
pub struct CategoryService {
    repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn get_category(&self, category_id: &str) -> Result<ClientCategory> {
        self.repository.get_by_id(category_id)
    }

    fn list_categories(&self, is_active_filter: Option<bool>) -> Result<Vec<ClientCategory>> {
        self.repository.list(is_active_filter)
    }

    async fn create_category(&self, new_category: NewClientCategory) -> Result<ClientCategory> {
        new_category.validate()?;
        self.repository.create(new_category).await
    }

    async fn update_category(&self, update: ClientCategoryUpdate) -> Result<ClientCategory> {
        update.validate()?;
        self.repository.update(update).await
    }

    async fn deactivate_category(&self, category_id: &str) -> Result<ClientCategory> {
        // Categories stay referenced by clients; deactivation only.
        self.repository
            .update(ClientCategoryUpdate {
                id: category_id.to_string(),
                name: None,
                discount_pct: None,
                is_active: Some(false),
            })
            .await
    }
}
