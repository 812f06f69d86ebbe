use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::methods_errors::MethodError;
use super::methods_model::{
    DeactivationKind, FinancialMethod, FinancialMethodDetail, NewFinancialMethod,
    NewFinancialMethodDetail,
};
use super::methods_traits::{MethodRepositoryTrait, MethodServiceTrait};
use crate::errors::Result;

/// Service for managing payment/collection channels and their concrete
/// instances.
pub struct MethodService {
    repository: Arc<dyn MethodRepositoryTrait>,
}

impl MethodService {
    pub fn new(repository: Arc<dyn MethodRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl MethodServiceTrait for MethodService {
    fn get_method(&self, method_id: &str) -> Result<FinancialMethod> {
        self.repository.get_method(method_id)
    }

    fn list_methods(&self, is_active_filter: Option<bool>) -> Result<Vec<FinancialMethod>> {
        self.repository.list_methods(is_active_filter)
    }

    async fn create_method(&self, new_method: NewFinancialMethod) -> Result<FinancialMethod> {
        new_method.validate()?;
        self.repository.create_method(new_method).await
    }

    async fn deactivate_method(&self, method_id: &str) -> Result<FinancialMethod> {
        debug!("Deactivating method {} with cascade to details", method_id);
        self.repository.set_method_active(method_id, false).await
    }

    async fn reactivate_method(&self, method_id: &str) -> Result<FinancialMethod> {
        // Only details switched off by the earlier cascade come back; details
        // their owner deactivated directly stay off.
        self.repository.set_method_active(method_id, true).await
    }

    fn get_detail(&self, detail_id: &str) -> Result<FinancialMethodDetail> {
        self.repository.get_detail(detail_id)
    }

    fn list_details(&self, method_id: &str) -> Result<Vec<FinancialMethodDetail>> {
        self.repository.list_details(method_id)
    }

    async fn create_detail(
        &self,
        new_detail: NewFinancialMethodDetail,
    ) -> Result<FinancialMethodDetail> {
        new_detail.validate()?;

        let method = self.repository.get_method(&new_detail.method_id)?;
        if !method.is_active {
            return Err(MethodError::MethodUnavailable(method.name).into());
        }

        self.repository.create_detail(new_detail).await
    }

    async fn deactivate_detail(&self, detail_id: &str) -> Result<FinancialMethodDetail> {
        self.repository
            .set_detail_active(detail_id, false, DeactivationKind::Direct)
            .await
    }

    async fn reactivate_detail(&self, detail_id: &str) -> Result<FinancialMethodDetail> {
        let detail = self.repository.get_detail(detail_id)?;

        // A cascade-deactivated detail follows its parent method; reactivating
        // it individually would bypass the admin action that switched it off.
        if detail.deactivation == DeactivationKind::Cascade {
            return Err(MethodError::InvalidData(format!(
                "Detail '{}' was deactivated with its method; reactivate the method instead",
                detail.label
            ))
            .into());
        }

        self.repository
            .set_detail_active(detail_id, true, DeactivationKind::None)
            .await
    }

    fn resolve_commission(&self, detail_id: &str) -> Result<Decimal> {
        let detail = self.repository.get_detail(detail_id)?;
        let method = self.repository.get_method(&detail.method_id)?;

        if !method.is_active {
            return Err(MethodError::MethodUnavailable(method.name).into());
        }
        if !detail.is_active {
            return Err(MethodError::MethodUnavailable(detail.label).into());
        }

        Ok(detail.effective_commission(&method))
    }
}
