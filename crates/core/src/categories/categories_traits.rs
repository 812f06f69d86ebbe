use async_trait::async_trait;

use super::categories_model::{ClientCategory, ClientCategoryUpdate, NewClientCategory};
use crate::errors::Result;

/// Trait defining the contract for client category repository operations.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    fn get_by_id(&self, category_id: &str) -> Result<ClientCategory>;
    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<ClientCategory>>;
    async fn create(&self, new_category: NewClientCategory) -> Result<ClientCategory>;
    async fn update(&self, update: ClientCategoryUpdate) -> Result<ClientCategory>;
}

/// Trait defining the contract for client category service operations.
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    fn get_category(&self, category_id: &str) -> Result<ClientCategory>;
    fn list_categories(&self, is_active_filter: Option<bool>) -> Result<Vec<ClientCategory>>;
    async fn create_category(&self, new_category: NewClientCategory) -> Result<ClientCategory>;
    async fn update_category(&self, update: ClientCategoryUpdate) -> Result<ClientCategory>;
    async fn deactivate_category(&self, category_id: &str) -> Result<ClientCategory>;
}
