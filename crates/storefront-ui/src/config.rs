//! Storefront configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_catalog::PriceFormat;
use storefront_data::CatalogEndpoints;

/// Environment variable overriding `api.base_url`.
pub const API_BASE_ENV: &str = "STOREFRONT_API_BASE";

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog API location.
    #[serde(default)]
    pub api: CatalogEndpoints,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            Self::from_toml(&content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Parse TOML config text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(self) -> Self {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`.
    pub fn apply_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(base) = lookup(API_BASE_ENV).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = base.trim().to_string();
        }
        self
    }
}

/// How the catalog is presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Text appended to prices.
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// Thousands separator for prices.
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: char,

    /// Heading of the featured section.
    #[serde(default = "default_featured_title")]
    pub featured_title: String,

    /// Heading of the full listing.
    #[serde(default = "default_all_products_title")]
    pub all_products_title: String,

    /// Slides shown by the promotional slider.
    #[serde(default)]
    pub promotions: Vec<Promotion>,
}

fn default_currency_suffix() -> String {
    PriceFormat::default().suffix
}

fn default_thousands_separator() -> char {
    PriceFormat::default().separator
}

fn default_featured_title() -> String {
    "Featured".to_string()
}

fn default_all_products_title() -> String {
    "All Products".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_suffix: default_currency_suffix(),
            thousands_separator: default_thousands_separator(),
            featured_title: default_featured_title(),
            all_products_title: default_all_products_title(),
            promotions: Vec::new(),
        }
    }
}

impl DisplayConfig {
    /// Price format derived from the display settings.
    pub fn price_format(&self) -> PriceFormat {
        PriceFormat::with_suffix(self.currency_suffix.clone()).separator(self.thousands_separator)
    }
}

/// One promotional slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    /// Slide caption, also used as image alt text.
    pub title: String,
    /// Banner image reference.
    pub image_url: String,
    /// Optional click-through target.
    #[serde(default)]
    pub link: Option<String>,
}
