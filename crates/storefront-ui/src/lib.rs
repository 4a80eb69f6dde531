//! Leptos components for the storefront product catalog.
//!
//! Two layers live here:
//!
//! - **Components**: `ProductCard` (grid or list), `ProductSection`,
//!   `CatalogPage`, plus the opaque `PromoSlider`, `CategoryStrip` and
//!   `QuickViewPanel` collaborators.
//! - **Headless models** the components render from, usable without a DOM:
//!   `CardModel`, `ImageLoadState`, `CardEvents`, `CatalogState`,
//!   `Favorites`, `PageLayout`.
//!
//! Data flows down as props; user intents flow up through callbacks.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use leptos::prelude::*;
//! use storefront_ui::prelude::*;
//!
//! #[component]
//! fn Home() -> impl IntoView {
//!     let source: SharedCatalogSource = Arc::new(StaticCatalogSource::new(Vec::new()));
//!     provide_storefront(StorefrontConfig::default(), source);
//!     view! { <CatalogPage/> }
//! }
//! ```

mod card;
mod collaborators;
mod config;
mod context;
mod favorites;
mod logging;
mod page;
mod section;
mod view_mode;

pub use card::{CardEvents, CardModel, ImageLoadState, InteractionEvent, ProductCard};
pub use collaborators::{CategoryStrip, PromoSlider, QuickViewPanel};
pub use config::{DisplayConfig, Promotion, StorefrontConfig};
pub use context::{provide_storefront, use_catalog_source, use_display_config, use_logger};
pub use favorites::Favorites;
pub use logging::ConsoleSink;
pub use page::{featured_products, load_catalog, CatalogPage, CatalogState, PageLayout, PageSection};
pub use section::ProductSection;
pub use view_mode::ViewMode;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        featured_products, load_catalog, provide_storefront, use_catalog_source,
        use_display_config, use_logger, CardEvents, CardModel, CatalogPage, CatalogState,
        CategoryStrip, ConsoleSink, DisplayConfig, Favorites, ImageLoadState, InteractionEvent,
        PageLayout, PageSection, ProductCard, ProductSection, PromoSlider, Promotion,
        QuickViewPanel, StorefrontConfig, ViewMode,
    };
    pub use storefront_catalog::prelude::*;
    pub use storefront_data::{CatalogSource, SharedCatalogSource, StaticCatalogSource};
}
