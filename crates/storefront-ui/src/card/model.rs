//! Display values derived from a product.

use storefront_catalog::{PriceFormat, Product, ProductId, StockStatus};

/// Everything a card renders, computed once from the product.
///
/// Both view modes read from the same model so stock handling is never
/// duplicated between layouts.
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub id: ProductId,
    pub name: String,
    /// Detail page the name and image link to.
    pub href: String,
    /// Category name or the uncategorized fallback.
    pub category_label: String,
    pub description: String,
    pub price_label: String,
    pub stock: StockStatus,
    pub image_url: String,
}

impl CardModel {
    /// Derive the card model.
    pub fn new(product: &Product, price_format: &PriceFormat) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            href: product.detail_path(),
            category_label: product.category_name().to_string(),
            description: product.description.clone(),
            price_label: price_format.format(product.price),
            stock: product.stock_status(),
            image_url: product.image_url.clone(),
        }
    }

    pub fn stock_label(&self) -> String {
        self.stock.label()
    }

    /// Class list for the stock line, carrying the severity tone.
    pub fn stock_class(&self) -> String {
        format!("product-card__stock {}", self.stock.tone())
    }

    pub fn purchasable(&self) -> bool {
        self.stock.can_purchase()
    }

    pub fn cart_label(&self) -> &'static str {
        self.stock.cart_label()
    }

    /// Whether the image carries the unavailable overlay.
    pub fn shows_unavailable_overlay(&self) -> bool {
        self.stock.is_out_of_stock()
    }
}
