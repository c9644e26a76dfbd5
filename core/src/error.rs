use crate::types::{EngineConfigError, ItemId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(#[from] EngineConfigError),
}

/// Load-time failures. A constructed `Catalog` is always valid.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid product at index {index}: {reason}")]
    InvalidItem { index: usize, reason: String },

    #[error("duplicate product id: {0}")]
    DuplicateId(ItemId),
}
