pub mod model;
pub mod repository;

pub use model::ClientCategoryDB;
pub use repository::CategoryRepository;
