//! The catalog data collaborator seam.

use std::sync::Arc;

use async_trait::async_trait;
use storefront_catalog::{Category, Product};

use crate::FetchError;

/// Provides the product collection and category list.
///
/// Each call is a single request: implementations do not retry, poll, or
/// paginate. The product order returned is the order displayed.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Load the full product collection.
    async fn list_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Load the category list.
    async fn list_categories(&self) -> Result<Vec<Category>, FetchError>;
}

/// A source shared through the component tree.
pub type SharedCatalogSource = Arc<dyn CatalogSource + Send + Sync>;
