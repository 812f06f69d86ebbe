pub mod model;
pub mod repository;

pub use model::ProfitDB;
pub use repository::ProfitRepository;
