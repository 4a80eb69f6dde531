//! Product catalog module.
//!
//! Contains the product and category records served by the catalog API
//! and the stock classification derived from them.

mod category;
mod product;
mod stock;

pub use category::{decode_categories, Category, CategoryRef, UNCATEGORIZED_LABEL};
pub use product::{decode_products, Product};
pub use stock::{StockStatus, LOW_STOCK_THRESHOLD};
