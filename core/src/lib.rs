pub mod catalog;
pub mod error;
pub mod recency;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, Error, Result};
pub use recency::RecencyStore;
