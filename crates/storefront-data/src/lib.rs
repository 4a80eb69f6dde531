//! Catalog data collaborators.
//!
//! The presentation layer never talks HTTP directly. It asks a
//! [`CatalogSource`] for the product collection and the category list:
//!
//! - `HttpCatalogSource` - One GET per call against the catalog API
//! - `StaticCatalogSource` - In-memory snapshot for tests and previews
//! - `HttpTransport` - The seam the HTTP source sends through
//!   (`SpinTransport` with the `spin` feature)
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::{CatalogEndpoints, CatalogSource, HttpCatalogSource, SpinTransport};
//!
//! let endpoints = CatalogEndpoints::new("https://api.example.com");
//! let source = HttpCatalogSource::new(SpinTransport, endpoints);
//!
//! match source.list_products().await {
//!     Ok(products) => println!("{} products", products.len()),
//!     Err(e) => eprintln!("catalog unavailable: {e}"),
//! }
//! ```

mod endpoints;
mod error;
mod http;
mod memory;
mod response;
mod source;
mod transport;

pub use endpoints::CatalogEndpoints;
pub use error::FetchError;
pub use http::HttpCatalogSource;
pub use memory::StaticCatalogSource;
pub use response::Response;
pub use source::{CatalogSource, SharedCatalogSource};
pub use transport::HttpTransport;

#[cfg(feature = "spin")]
pub use transport::SpinTransport;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CatalogEndpoints, CatalogSource, FetchError, HttpCatalogSource, HttpTransport, Response,
        SharedCatalogSource, StaticCatalogSource,
    };
}
