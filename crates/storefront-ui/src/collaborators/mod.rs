//! Components the catalog page composes around its product sections.

mod category_strip;
mod promo_slider;
mod quick_view;

pub use category_strip::CategoryStrip;
pub use promo_slider::PromoSlider;
pub use quick_view::QuickViewPanel;
