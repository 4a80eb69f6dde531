//! In-memory catalog source.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use storefront_catalog::{Category, Product};

use crate::{CatalogSource, FetchError};

/// Serves a fixed catalog snapshot, or a fixed failure.
///
/// Counts calls so callers can check how many fetches were issued.
#[derive(Debug)]
pub struct StaticCatalogSource {
    products: Result<Vec<Product>, FetchError>,
    categories: Result<Vec<Category>, FetchError>,
    product_calls: AtomicUsize,
    category_calls: AtomicUsize,
}

impl StaticCatalogSource {
    /// Serve the given products and no categories.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Ok(products),
            categories: Ok(Vec::new()),
            product_calls: AtomicUsize::new(0),
            category_calls: AtomicUsize::new(0),
        }
    }

    /// Fail every product and category request with `error`.
    pub fn failing(error: FetchError) -> Self {
        Self {
            products: Err(error.clone()),
            categories: Err(error),
            product_calls: AtomicUsize::new(0),
            category_calls: AtomicUsize::new(0),
        }
    }

    /// Serve the given categories.
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = Ok(categories);
        self
    }

    /// Number of product requests served.
    pub fn product_calls(&self) -> usize {
        self.product_calls.load(Ordering::SeqCst)
    }

    /// Number of category requests served.
    pub fn category_calls(&self) -> usize {
        self.category_calls.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl CatalogSource for StaticCatalogSource {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        self.product_calls.fetch_add(1, Ordering::SeqCst);
        self.products.clone()
    }

    async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.category_calls.fetch_add(1, Ordering::SeqCst);
        self.categories.clone()
    }
}
