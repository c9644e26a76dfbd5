pub mod config;
pub use config::{DEFAULT_RECENCY_CAPACITY, EngineConfig, EngineConfigError};

pub(crate) mod item;
pub use item::{CatalogItem, Category, CategoryError, ItemId, ItemName, ItemNameError, Price, PriceError};
