//! Catalog lifecycle owned by the page.

use std::fmt;

use storefront_catalog::{Product, ProductId};
use storefront_data::CatalogSource;
use storefront_observability::StructuredLogger;

/// Where the page's catalog is in its single load.
///
/// `Idle -> Loading -> Ready | Failed`, and the catalog is only ever
/// replaced whole. `Failed` exposes an empty catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    /// Not mounted yet.
    #[default]
    Idle,
    /// Fetch in flight.
    Loading,
    /// Fetch succeeded.
    Ready(Vec<Product>),
    /// Fetch failed; holds the error text.
    Failed(String),
}

impl CatalogState {
    /// Turn a fetch result into the next state, logging the outcome.
    pub fn settle<E: fmt::Display>(result: Result<Vec<Product>, E>, logger: &StructuredLogger) -> Self {
        match result {
            Ok(products) => {
                logger
                    .info_builder("Catalog loaded")
                    .field_i64("products", products.len() as i64)
                    .emit();
                CatalogState::Ready(products)
            }
            Err(e) => {
                let message = e.to_string();
                logger
                    .error_builder("Catalog fetch failed")
                    .field("error", message.clone())
                    .emit();
                CatalogState::Failed(message)
            }
        }
    }

    /// Products to display, in the order received.
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogState::Ready(products) => products,
            _ => &[],
        }
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Fetch the product collection once and settle it.
pub async fn load_catalog(source: &dyn CatalogSource, logger: &StructuredLogger) -> CatalogState {
    CatalogState::settle(source.list_products().await, logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storefront_data::{FetchError, StaticCatalogSource};
    use storefront_observability::{LogLevel, MemorySink};

    fn logger() -> (StructuredLogger, MemorySink) {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new("CatalogPage").with_sink(Arc::new(sink.clone()));
        (logger, sink)
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = CatalogState::default();
        assert!(state.products().is_empty());
        assert!(!state.is_loading());
        assert!(CatalogState::Loading.products().is_empty());
    }

    #[tokio::test]
    async fn test_load_replaces_catalog_in_order() {
        let (logger, sink) = logger();
        let source = StaticCatalogSource::new(vec![
            Product::new(2, "B", 500.0, 8),
            Product::new(1, "A", 1000.0, 0),
        ]);

        let state = load_catalog(&source, &logger).await;

        let ids: Vec<i64> = state.products().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(source.product_calls(), 1);
        assert!(state.find(ProductId::new(1)).is_some_and(|p| p.is_out_of_stock()));

        let entries = sink.entries();
        assert_eq!(entries[0].message, "Catalog loaded");
        assert_eq!(entries[0].field("products"), Some(&serde_json::json!(2)));
    }

    #[tokio::test]
    async fn test_failure_leaves_catalog_empty_and_logs() {
        let (logger, sink) = logger();
        let source = StaticCatalogSource::failing(FetchError::HttpError {
            status: 500,
            message: "boom".to_string(),
        });

        let state = load_catalog(&source, &logger).await;

        assert!(state.products().is_empty());
        assert!(state.error().is_some());
        assert_eq!(source.product_calls(), 1);

        let errors = sink.at_least(LogLevel::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Catalog fetch failed");
        assert!(errors[0].field("error").is_some());
    }
}
