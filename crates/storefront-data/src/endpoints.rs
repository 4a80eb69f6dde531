//! Catalog API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Where the catalog API lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEndpoints {
    /// Base URL prepended to relative paths.
    #[serde(default)]
    pub base_url: String,

    /// Path of the product collection.
    #[serde(default = "default_products_path")]
    pub products_path: String,

    /// Path of the category list.
    #[serde(default = "default_categories_path")]
    pub categories_path: String,
}

fn default_products_path() -> String {
    "/api/products".to_string()
}

fn default_categories_path() -> String {
    "/api/categories".to_string()
}

impl Default for CatalogEndpoints {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            products_path: default_products_path(),
            categories_path: default_categories_path(),
        }
    }
}

impl CatalogEndpoints {
    /// Create endpoints for a base URL with the default paths.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the product collection.
    pub fn products_url(&self) -> String {
        self.join(&self.products_path)
    }

    /// Full URL of the category list.
    pub fn categories_url(&self) -> String {
        self.join(&self.categories_path)
    }

    fn join(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_base() {
        let endpoints = CatalogEndpoints::new("https://api.example.com/");
        assert_eq!(endpoints.products_url(), "https://api.example.com/api/products");
        assert_eq!(endpoints.categories_url(), "https://api.example.com/api/categories");
    }

    #[test]
    fn test_absolute_path_wins() {
        let endpoints = CatalogEndpoints {
            products_path: "https://cdn.example.com/products.json".to_string(),
            ..CatalogEndpoints::new("https://api.example.com")
        };
        assert_eq!(endpoints.products_url(), "https://cdn.example.com/products.json");
    }

    #[test]
    fn test_partial_config_uses_default_paths() {
        let endpoints: CatalogEndpoints =
            serde_json::from_str(r#"{"base_url": "http://localhost:8080"}"#).unwrap();
        assert_eq!(endpoints.products_url(), "http://localhost:8080/api/products");
    }
}
