//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while reading catalog data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A record did not have the expected product/category shape.
    #[error("Invalid catalog record: {0}")]
    InvalidRecord(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_data() {
            CatalogError::InvalidRecord(e.to_string())
        } else {
            CatalogError::Serialization(e.to_string())
        }
    }
}
