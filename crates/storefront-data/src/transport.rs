//! Outbound HTTP transport.

use async_trait::async_trait;

use crate::{FetchError, Response};

/// Sends GET requests for the catalog source.
///
/// Futures are not required to be `Send`: the storefront runs on a
/// single-threaded executor in both Spin and the browser.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Issue a GET request and return the raw response, whatever its status.
    async fn get(&self, url: &str) -> Result<Response, FetchError>;
}

/// Transport backed by Spin's outbound HTTP.
#[cfg(feature = "spin")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinTransport;

#[cfg(feature = "spin")]
#[async_trait(?Send)]
impl HttpTransport for SpinTransport {
    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method, Request};

        if url.is_empty() {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }

        let req = Request::builder()
            .method(Method::Get)
            .uri(url)
            .header("accept", "application/json")
            .build();

        let resp: spin_sdk::http::Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = *resp.status();
        let mut headers = std::collections::HashMap::new();
        if let Some(content_type) = resp.header("content-type").and_then(|v| v.as_str()) {
            headers.insert("content-type".to_string(), content_type.to_string());
        }

        Ok(Response::new(status, headers, resp.into_body()))
    }
}
