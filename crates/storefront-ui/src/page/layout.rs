//! Fixed section order of the catalog page.

use storefront_catalog::Product;

use crate::config::DisplayConfig;

/// A block of the catalog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSection {
    PromoSlider,
    CategoryStrip,
    Featured { title: String },
    AllProducts { title: String },
}

/// Catalog page composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    featured_title: String,
    all_products_title: String,
}

impl PageLayout {
    pub fn new(featured_title: impl Into<String>, all_products_title: impl Into<String>) -> Self {
        Self {
            featured_title: featured_title.into(),
            all_products_title: all_products_title.into(),
        }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(config.featured_title.clone(), config.all_products_title.clone())
    }

    /// Sections in render order.
    pub fn sections(&self) -> Vec<PageSection> {
        vec![
            PageSection::PromoSlider,
            PageSection::CategoryStrip,
            PageSection::Featured {
                title: self.featured_title.clone(),
            },
            PageSection::AllProducts {
                title: self.all_products_title.clone(),
            },
        ]
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}

/// Products shown in the featured section.
///
/// There is no separate featured selection; it is the whole catalog.
pub fn featured_products(catalog: &[Product]) -> &[Product] {
    catalog
}
