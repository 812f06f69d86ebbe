// Module declarations
pub(crate) mod profit_calculator;
pub(crate) mod profit_errors;
pub(crate) mod profit_model;
pub(crate) mod profit_service;
pub(crate) mod profit_traits;

// Re-export the public interface
pub use profit_calculator::net_profit;
pub use profit_errors::ProfitError;
pub use profit_model::{NewProfit, Profit};
pub use profit_service::ProfitService;
pub use profit_traits::{ProfitRepositoryTrait, ProfitServiceTrait};
