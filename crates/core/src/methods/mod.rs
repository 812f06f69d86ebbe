// Module declarations
pub(crate) mod methods_errors;
pub(crate) mod methods_model;
pub(crate) mod methods_service;
pub(crate) mod methods_traits;

#[cfg(test)]
mod methods_model_tests;

// Re-export the public interface
pub use methods_errors::MethodError;
pub use methods_model::{
    DeactivationKind, FinancialMethod, FinancialMethodDetail, MethodKind, NewFinancialMethod,
    NewFinancialMethodDetail,
};
pub use methods_service::MethodService;
pub use methods_traits::{MethodRepositoryTrait, MethodServiceTrait};
