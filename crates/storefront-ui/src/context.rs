//! Storefront values shared through the Leptos context.

use std::sync::Arc;

use leptos::prelude::*;
use storefront_data::SharedCatalogSource;
use storefront_observability::{LogFormat, StructuredLogger};

use crate::config::{DisplayConfig, StorefrontConfig};
use crate::logging::ConsoleSink;

/// Provide the catalog source, display settings and operator logger to
/// every component below the caller.
pub fn provide_storefront(config: StorefrontConfig, source: SharedCatalogSource) {
    provide_context(config.display);
    provide_context(source);
    provide_context(
        StructuredLogger::new("storefront")
            .with_format(LogFormat::Human)
            .with_sink(Arc::new(ConsoleSink)),
    );
}

/// The catalog source, if one was provided.
pub fn use_catalog_source() -> Option<SharedCatalogSource> {
    use_context::<SharedCatalogSource>()
}

/// Display settings, falling back to defaults.
pub fn use_display_config() -> DisplayConfig {
    use_context::<DisplayConfig>().unwrap_or_default()
}

/// Logger for a component.
pub fn use_logger(component: &str) -> StructuredLogger {
    match use_context::<StructuredLogger>() {
        Some(logger) => logger.child(component),
        None => StructuredLogger::new(component)
            .with_format(LogFormat::Human)
            .with_sink(Arc::new(ConsoleSink)),
    }
}
