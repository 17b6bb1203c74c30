//! Error types shared by the core and the frontend data source

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure before any response arrived
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    /// Response body was not the expected JSON array of products
    #[error("failed to decode catalog: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("page size {0} is not one of the offered sizes")]
    InvalidPageSize(usize),

    #[error("unknown sort key: {0:?}")]
    UnknownSortKey(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
