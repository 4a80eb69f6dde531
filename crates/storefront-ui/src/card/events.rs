//! Upward notifications from a card.

use leptos::prelude::*;
use storefront_catalog::{ProductId, StockStatus};

/// The parts of a DOM event a card handler touches.
pub trait InteractionEvent {
    /// Cancel the browser's default action (link navigation).
    fn suppress_default(&self);
    /// Keep the event from reaching ancestor handlers.
    fn stop_bubbling(&self);
}

impl InteractionEvent for leptos::ev::MouseEvent {
    fn suppress_default(&self) {
        self.prevent_default();
    }

    fn stop_bubbling(&self) {
        self.stop_propagation();
    }
}

/// Callbacks wired to one card.
///
/// The card owns no interaction state; each handler only forwards to the
/// parent, which decides what changes.
#[derive(Clone, Copy)]
pub struct CardEvents {
    product_id: ProductId,
    purchasable: bool,
    on_like_toggle: Option<Callback<()>>,
    on_quick_view: Option<Callback<ProductId>>,
    on_add_to_cart: Option<Callback<ProductId>>,
}

impl CardEvents {
    pub fn new(product_id: ProductId, stock: StockStatus) -> Self {
        Self {
            product_id,
            purchasable: stock.can_purchase(),
            on_like_toggle: None,
            on_quick_view: None,
            on_add_to_cart: None,
        }
    }

    pub fn with_like_toggle(mut self, callback: Option<Callback<()>>) -> Self {
        self.on_like_toggle = callback;
        self
    }

    pub fn with_quick_view(mut self, callback: Option<Callback<ProductId>>) -> Self {
        self.on_quick_view = callback;
        self
    }

    pub fn with_add_to_cart(mut self, callback: Option<Callback<ProductId>>) -> Self {
        self.on_add_to_cart = callback;
        self
    }

    /// Like control activated. Also keeps an enclosing link from navigating.
    pub fn like(&self, event: &impl InteractionEvent) {
        event.suppress_default();
        event.stop_bubbling();
        if let Some(callback) = self.on_like_toggle {
            callback.run(());
        }
    }

    /// Quick-view control activated.
    ///
    /// Navigation and bubbling are suppressed even when no callback is
    /// wired, so the control never behaves like the surrounding link.
    pub fn quick_view(&self, event: &impl InteractionEvent) {
        event.suppress_default();
        event.stop_bubbling();
        if let Some(callback) = self.on_quick_view {
            callback.run(self.product_id);
        }
    }

    /// Add-to-cart control activated. Ignored when out of stock.
    pub fn add_to_cart(&self, event: &impl InteractionEvent) {
        event.stop_bubbling();
        if !self.purchasable {
            return;
        }
        if let Some(callback) = self.on_add_to_cart {
            callback.run(self.product_id);
        }
    }
}
