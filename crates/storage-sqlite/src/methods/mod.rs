pub mod model;
pub mod repository;

pub use model::{FinancialMethodDB, FinancialMethodDetailDB};
pub use repository::MethodRepository;
