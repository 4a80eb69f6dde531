//! Stock status classification.
//!
//! Every stock-dependent decision on a card (overlay, label, add-to-cart
//! gating) goes through [`StockStatus`], so the three classes stay
//! mutually exclusive and exhaustive:
//!
//! | quantity      | status       |
//! |---------------|--------------|
//! | `<= 0`        | out of stock |
//! | `1..=5`       | low stock    |
//! | `> 5`         | in stock     |

use serde::{Deserialize, Serialize};

/// Highest quantity still classified as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Derived three-way stock classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "quantity", rename_all = "snake_case")]
pub enum StockStatus {
    /// Nothing on hand.
    OutOfStock,
    /// A few units left.
    LowStock(i64),
    /// Comfortably available.
    InStock(i64),
}

impl StockStatus {
    /// Classify a quantity on hand.
    pub fn from_quantity(quantity: i64) -> Self {
        if quantity <= 0 {
            StockStatus::OutOfStock
        } else if quantity <= LOW_STOCK_THRESHOLD {
            StockStatus::LowStock(quantity)
        } else {
            StockStatus::InStock(quantity)
        }
    }

    /// Check if out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, StockStatus::OutOfStock)
    }

    /// Check if stock is low.
    pub fn is_low_stock(&self) -> bool {
        matches!(self, StockStatus::LowStock(_))
    }

    /// Check if the item can be added to the cart.
    pub fn can_purchase(&self) -> bool {
        !self.is_out_of_stock()
    }

    /// Quantity on hand (zero when out of stock).
    pub fn quantity(&self) -> i64 {
        match self {
            StockStatus::OutOfStock => 0,
            StockStatus::LowStock(n) | StockStatus::InStock(n) => *n,
        }
    }

    /// Customer-facing stock line.
    pub fn label(&self) -> String {
        match self {
            StockStatus::OutOfStock => "Out of Stock".to_string(),
            StockStatus::LowStock(n) => format!("Only {} left", n),
            StockStatus::InStock(n) => format!("{} in stock", n),
        }
    }

    /// CSS class carrying the severity of the stock line.
    pub fn tone(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "stock-out",
            StockStatus::LowStock(_) => "stock-low",
            StockStatus::InStock(_) => "stock-in",
        }
    }

    /// Short machine name, used for data attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out",
            StockStatus::LowStock(_) => "low",
            StockStatus::InStock(_) => "in",
        }
    }

    /// Label of the add-to-cart control.
    pub fn cart_label(&self) -> &'static str {
        if self.can_purchase() {
            "Add to Cart"
        } else {
            "Unavailable"
        }
    }
}
