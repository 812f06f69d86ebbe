pub mod model;
pub mod repository;

pub use model::{StockEntryDB, StockMovementDB, StockMovementDetailDB};
pub use repository::StockRepository;
