use async_trait::async_trait;

use super::methods_model::{
    DeactivationKind, FinancialMethod, FinancialMethodDetail, NewFinancialMethod,
    NewFinancialMethodDetail,
};
use crate::errors::Result;

/// Trait defining the contract for financial method repository operations.
#[async_trait]
pub trait MethodRepositoryTrait: Send + Sync {
    fn get_method(&self, method_id: &str) -> Result<FinancialMethod>;
    fn list_methods(&self, is_active_filter: Option<bool>) -> Result<Vec<FinancialMethod>>;
    async fn create_method(&self, new_method: NewFinancialMethod) -> Result<FinancialMethod>;
    /// Flips the method's active flag and applies the matching cascade to its
    /// details in the same transaction: deactivation tags every active detail
    /// as cascade-deactivated; reactivation restores only cascade-tagged ones.
    async fn set_method_active(&self, method_id: &str, active: bool) -> Result<FinancialMethod>;

    fn get_detail(&self, detail_id: &str) -> Result<FinancialMethodDetail>;
    fn list_details(&self, method_id: &str) -> Result<Vec<FinancialMethodDetail>>;
    async fn create_detail(&self, new_detail: NewFinancialMethodDetail)
        -> Result<FinancialMethodDetail>;
    async fn set_detail_active(
        &self,
        detail_id: &str,
        active: bool,
        deactivation: DeactivationKind,
    ) -> Result<FinancialMethodDetail>;
}

/// Trait defining the contract for financial method service operations.
#[async_trait]
pub trait MethodServiceTrait: Send + Sync {
    fn get_method(&self, method_id: &str) -> Result<FinancialMethod>;
    fn list_methods(&self, is_active_filter: Option<bool>) -> Result<Vec<FinancialMethod>>;
    async fn create_method(&self, new_method: NewFinancialMethod) -> Result<FinancialMethod>;
    async fn deactivate_method(&self, method_id: &str) -> Result<FinancialMethod>;
    async fn reactivate_method(&self, method_id: &str) -> Result<FinancialMethod>;

    fn get_detail(&self, detail_id: &str) -> Result<FinancialMethodDetail>;
    fn list_details(&self, method_id: &str) -> Result<Vec<FinancialMethodDetail>>;
    async fn create_detail(&self, new_detail: NewFinancialMethodDetail)
        -> Result<FinancialMethodDetail>;
    async fn deactivate_detail(&self, detail_id: &str) -> Result<FinancialMethodDetail>;
    async fn reactivate_detail(&self, detail_id: &str) -> Result<FinancialMethodDetail>;

    /// Resolves the commission percentage in effect for a detail, failing if
    /// either the detail or its parent method is inactive.
    fn resolve_commission(&self, detail_id: &str) -> Result<rust_decimal::Decimal>;
}
