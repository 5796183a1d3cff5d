pub mod catalog;
pub mod error;
pub mod level;
pub mod models;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use level::LevelConfig;
pub use models::{Item, ItemId};
