//! Catalog domain types for the storefront.
//!
//! This crate holds the read-only view of the product catalog that the
//! presentation layer consumes:
//!
//! - **Catalog**: `Product`, `Category`, `CategoryRef`
//! - **Stock**: three-way `StockStatus` classification
//! - **Price**: locale-style grouping with a currency suffix
//! - **Timestamps**: lenient decoding of string or structured dates
//!
//! # Example
//!
//! ```
//! use storefront_catalog::prelude::*;
//!
//! let products = decode_products(br#"[
//!     {"id": 1, "name": "Mug", "category": null, "price": 12000, "stock": 3,
//!      "imageUrl": "https://cdn.example.com/mug.png"}
//! ]"#).unwrap();
//!
//! let mug = &products[0];
//! assert_eq!(mug.stock_status().label(), "Only 3 left");
//! assert_eq!(mug.category_name(), UNCATEGORIZED_LABEL);
//! assert_eq!(PriceFormat::default().format(mug.price), "12,000원");
//! ```

pub mod catalog;
pub mod error;
pub mod ids;
pub mod price;
pub mod timestamp;

pub use catalog::{
    decode_categories, decode_products, Category, CategoryRef, Product, StockStatus,
    LOW_STOCK_THRESHOLD, UNCATEGORIZED_LABEL,
};
pub use error::CatalogError;
pub use ids::{CategoryId, ProductId};
pub use price::PriceFormat;
pub use timestamp::Timestamp;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{
        decode_categories, decode_products, Category, CategoryRef, Product, StockStatus,
        LOW_STOCK_THRESHOLD, UNCATEGORIZED_LABEL,
    };
    pub use crate::error::CatalogError;
    pub use crate::ids::{CategoryId, ProductId};
    pub use crate::price::PriceFormat;
    pub use crate::timestamp::Timestamp;
}
