//! Catalog source backed by server functions.

use async_trait::async_trait;
use leptos::server_fn::error::ServerFnError;
use storefront_catalog::{Category, Product};
use storefront_data::{CatalogSource, FetchError};

/// Reads the catalog through the app's server functions.
///
/// In the browser each call is one request to the Spin component, which
/// in turn issues one request to the catalog API.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnSource;

#[async_trait(?Send)]
impl CatalogSource for ServerFnSource {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        get_products().await.map_err(into_fetch_error)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        get_categories().await.map_err(into_fetch_error)
    }
}

fn into_fetch_error(e: ServerFnError) -> FetchError {
    FetchError::RequestError(e.to_string())
}

#[cfg(feature = "ssr")]
fn backend() -> Result<storefront_data::HttpCatalogSource<storefront_data::SpinTransport>, ServerFnError> {
    use storefront_data::{HttpCatalogSource, SpinTransport};

    let config = crate::app::demo_config()
        .map_err(|e| ServerFnError::new(format!("Config error: {:#}", e)))?
        .apply_env();
    Ok(HttpCatalogSource::new(SpinTransport, config.api))
}

/// Fetch the product collection from the catalog API.
#[leptos::server(prefix = "/api")]
pub async fn get_products() -> Result<Vec<Product>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        backend()?
            .list_products()
            .await
            .map_err(|e| ServerFnError::new(format!("Catalog error: {}", e)))
    }

    #[cfg(not(feature = "ssr"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}

/// Fetch the category list from the catalog API.
#[leptos::server(prefix = "/api")]
pub async fn get_categories() -> Result<Vec<Category>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        backend()?
            .list_categories()
            .await
            .map_err(|e| ServerFnError::new(format!("Catalog error: {}", e)))
    }

    #[cfg(not(feature = "ssr"))]
    {
        Err(ServerFnError::new("Server-only function"))
    }
}
