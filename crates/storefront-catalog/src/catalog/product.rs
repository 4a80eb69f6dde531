//! Product records as served by the catalog API.

use crate::catalog::category::{CategoryRef, UNCATEGORIZED_LABEL};
use crate::catalog::stock::StockStatus;
use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::timestamp::{self, Timestamp};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// The presentation layer only ever reads products; nothing in the
/// storefront mutates one after it has been decoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category reference (None means uncategorized).
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Price amount in the storefront currency.
    pub price: f64,
    /// Quantity on hand.
    pub stock: i64,
    /// Remote image reference.
    #[serde(default)]
    pub image_url: String,
    /// Creation time.
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub created_at: Option<Timestamp>,
    /// Last update time.
    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub updated_at: Option<Timestamp>,
}

impl Product {
    /// Create a product with the required fields.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64, stock: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            description: String::new(),
            price,
            stock,
            image_url: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the category.
    pub fn with_category(mut self, category: CategoryRef) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Derived stock classification.
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_quantity(self.stock)
    }

    /// Check if out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock_status().is_out_of_stock()
    }

    /// Check if stock is low.
    pub fn is_low_stock(&self) -> bool {
        self.stock_status().is_low_stock()
    }

    /// Category name, or the fallback label when uncategorized.
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or(UNCATEGORIZED_LABEL)
    }

    /// Path of the product detail page.
    pub fn detail_path(&self) -> String {
        format!("/product/{}", self.id)
    }
}

/// Decode a JSON array of products.
pub fn decode_products(bytes: &[u8]) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CategoryId;

    const CATALOG_JSON: &str = r#"[
        {
            "id": 1,
            "name": "A",
            "category": null,
            "description": "First",
            "price": 1000,
            "stock": 0,
            "imageUrl": "https://cdn.example.com/a.png",
            "createdAt": "2024-01-02T03:04:05Z",
            "updatedAt": {"seconds": 1704164645, "nanos": 0}
        },
        {
            "id": 2,
            "name": "B",
            "category": {"id": 9, "name": "Kitchen"},
            "price": 25000.5,
            "stock": 3,
            "imageUrl": "https://cdn.example.com/b.png",
            "createdAt": "not a date"
        }
    ]"#;

    #[test]
    fn test_decode_catalog() {
        let products = decode_products(CATALOG_JSON.as_bytes()).unwrap();
        assert_eq!(products.len(), 2);

        let a = &products[0];
        assert_eq!(a.id, ProductId::new(1));
        assert!(a.category.is_none());
        assert_eq!(a.price, 1000.0);
        assert!(a.created_at.is_some());
        assert_eq!(a.created_at, a.updated_at);

        let b = &products[1];
        assert_eq!(b.category.as_ref().map(|c| c.id), Some(CategoryId::new(9)));
        assert_eq!(b.description, "");
        assert!(b.created_at.is_none());
        assert!(b.updated_at.is_none());
    }

    #[test]
    fn test_decode_preserves_order() {
        let products = decode_products(CATALOG_JSON.as_bytes()).unwrap();
        let ids: Vec<i64> = products.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_category_fallback() {
        let product = Product::new(1, "Loose", 500.0, 10);
        assert_eq!(product.category_name(), UNCATEGORIZED_LABEL);

        let product = product.with_category(CategoryRef {
            id: CategoryId::new(2),
            name: "Garden".to_string(),
        });
        assert_eq!(product.category_name(), "Garden");
    }

    #[test]
    fn test_stock_helpers() {
        assert!(Product::new(1, "A", 1.0, 0).is_out_of_stock());
        assert!(Product::new(2, "B", 1.0, 5).is_low_stock());
        assert!(!Product::new(3, "C", 1.0, 6).is_low_stock());
    }

    #[test]
    fn test_detail_path() {
        assert_eq!(Product::new(42, "A", 1.0, 1).detail_path(), "/product/42");
    }

    #[test]
    fn test_missing_required_field_is_invalid_record() {
        let err = decode_products(br#"[{"id": 1, "name": "A"}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord(_)));
    }
}
