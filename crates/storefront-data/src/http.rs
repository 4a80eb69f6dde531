//! Catalog source over the HTTP catalog API.

use async_trait::async_trait;
use storefront_catalog::{decode_categories, decode_products, Category, Product};

use crate::{CatalogEndpoints, CatalogSource, FetchError, HttpTransport};

/// Loads the catalog with one GET per call.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource<T> {
    transport: T,
    endpoints: CatalogEndpoints,
}

impl<T: HttpTransport> HttpCatalogSource<T> {
    /// Create a source sending through `transport`.
    pub fn new(transport: T, endpoints: CatalogEndpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    /// The configured endpoints.
    pub fn endpoints(&self) -> &CatalogEndpoints {
        &self.endpoints
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let resp = self.transport.get(url).await?.error_for_status()?;
        Ok(resp.body)
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport> CatalogSource for HttpCatalogSource<T> {
    async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        let body = self.fetch(&self.endpoints.products_url()).await?;
        Ok(decode_products(&body)?)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        let body = self.fetch(&self.endpoints.categories_url()).await?;
        Ok(decode_categories(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Response;
    use std::sync::Mutex;

    /// Replays one canned response and records requested URLs.
    struct CannedTransport {
        response: Result<Response, FetchError>,
        requested: Mutex<Vec<String>>,
    }

    impl CannedTransport {
        fn new(response: Result<Response, FetchError>) -> Self {
            Self {
                response,
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for CannedTransport {
        async fn get(&self, url: &str) -> Result<Response, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.response.clone()
        }
    }

    fn source(response: Result<Response, FetchError>) -> HttpCatalogSource<CannedTransport> {
        HttpCatalogSource::new(
            CannedTransport::new(response),
            CatalogEndpoints::new("https://api.example.com"),
        )
    }

    #[tokio::test]
    async fn test_list_products_success() {
        let body = r#"[
            {"id": 1, "name": "A", "category": null, "price": 1000, "stock": 0, "imageUrl": "a.png"},
            {"id": 2, "name": "B", "price": 2000, "stock": 9, "imageUrl": "b.png"}
        ]"#;
        let source = source(Ok(Response::json_body(200, body)));

        let products = source.list_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "A");
        assert_eq!(
            source.transport.requested(),
            vec!["https://api.example.com/api/products".to_string()]
        );
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error_without_retry() {
        let source = source(Ok(Response::json_body(500, r#"{"error": "boom"}"#)));

        let err = source.list_products().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(source.transport.requested().len(), 1);
    }

    #[tokio::test]
    async fn test_unexpected_body_shape_is_parse_error() {
        let source = source(Ok(Response::json_body(200, r#"{"items": []}"#)));
        assert!(matches!(
            source.list_products().await,
            Err(FetchError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let source = source(Err(FetchError::RequestError("connection refused".into())));
        assert_eq!(
            source.list_categories().await,
            Err(FetchError::RequestError("connection refused".into()))
        );
    }

    #[tokio::test]
    async fn test_list_categories() {
        let source = source(Ok(Response::json_body(
            200,
            r#"[{"id": 1, "name": "Kitchen"}]"#,
        )));
        let categories = source.list_categories().await.unwrap();
        assert_eq!(categories[0].name, "Kitchen");
        assert_eq!(
            source.transport.requested(),
            vec!["https://api.example.com/api/categories".to_string()]
        );
    }
}
