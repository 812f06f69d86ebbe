pub mod model;
pub mod repository;

pub use model::{RateDB, RateHistoryDB};
pub use repository::RateRepository;
