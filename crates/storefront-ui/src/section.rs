//! Titled list of product cards.

use leptos::prelude::*;
use storefront_catalog::{Product, ProductId};

use crate::card::ProductCard;
use crate::favorites::Favorites;
use crate::view_mode::ViewMode;

/// A titled run of product cards in catalog order.
///
/// Used for both the featured and the full listing; the two differ only in
/// title and the sequence passed in.
#[component]
pub fn ProductSection(
    #[prop(into)] title: String,
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(optional)] view_mode: ViewMode,
    favorites: RwSignal<Favorites>,
    on_quick_view: Callback<ProductId>,
    /// Stable identifier for the section element.
    #[prop(optional, into)]
    section_id: String,
) -> impl IntoView {
    view! {
        <section class="product-section" data-section=section_id>
            <h2 class="product-section__title">{title}</h2>
            <div class=view_mode.container_class()>
                <For
                    each=move || products.get()
                    key=|product| product.id
                    children=move |product: Product| {
                        let id = product.id;
                        let is_liked = Signal::derive(move || favorites.with(|f| f.contains(id)));
                        let on_like_toggle = Callback::new(move |_: ()| {
                            favorites.update(|f| {
                                f.toggle(id);
                            })
                        });
                        view! {
                            <ProductCard
                                product=product
                                is_liked=is_liked
                                on_like_toggle=on_like_toggle
                                view_mode=view_mode
                                on_quick_view=on_quick_view
                            />
                        }
                    }
                />
            </div>
        </section>
    }
}
