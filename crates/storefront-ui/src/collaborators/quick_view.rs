use leptos::prelude::*;
use storefront_catalog::Product;

use crate::card::CardModel;
use crate::context::use_display_config;

/// Preview of the product picked through a card's quick-view control.
#[component]
pub fn QuickViewPanel(
    #[prop(into)] product: Signal<Option<Product>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let price_format = use_display_config().price_format();

    move || {
        product.get().map(|product| {
            let model = CardModel::new(&product, &price_format);
            let stock_class = model.stock_class();
            let stock_label = model.stock_label();
            let CardModel {
                id,
                name,
                href,
                category_label,
                description,
                price_label,
                image_url,
                ..
            } = model;
            let image_alt = name.clone();
            view! {
                <aside class="quick-view" role="dialog" aria-label="Quick view" data-product-id=id.to_string()>
                    <button type="button" class="quick-view__close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                    <img class="quick-view__image" src=image_url alt=image_alt/>
                    <h3 class="quick-view__name">{name}</h3>
                    <p class="quick-view__category">{category_label}</p>
                    <p class="quick-view__description">{description}</p>
                    <p class="quick-view__price">{price_label}</p>
                    <p class=stock_class>{stock_label}</p>
                    <a class="quick-view__details" href=href>"View details"</a>
                </aside>
            }
        })
    }
}
