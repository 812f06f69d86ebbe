pub mod model;
pub mod repository;

pub use model::{CurrencyDB, DenominationDB};
pub use repository::CurrencyRepository;
