//! Product card in grid and list layouts.

mod events;
mod image;
mod model;

pub use events::{CardEvents, InteractionEvent};
pub use image::ImageLoadState;
pub use model::CardModel;

use leptos::prelude::*;
use storefront_catalog::{Product, ProductId};

use crate::context::use_display_config;
use crate::view_mode::ViewMode;
use image::CardImage;

/// One product, rendered as a grid cell or a list row.
///
/// Renders nothing when `product` is `None`. The card never mutates the
/// product or the liked flag; it reports intents through the callbacks.
#[component]
pub fn ProductCard(
    /// Product to display.
    #[prop(into)]
    product: Option<Product>,
    /// Whether the like control shows as active.
    #[prop(into, default = Signal::derive(|| false))]
    is_liked: Signal<bool>,
    /// Fired with no payload when the like control is activated.
    #[prop(optional, into)]
    on_like_toggle: Option<Callback<()>>,
    /// Layout to render with.
    #[prop(optional)]
    view_mode: ViewMode,
    /// Fired with the product id when quick view is activated.
    #[prop(optional, into)]
    on_quick_view: Option<Callback<ProductId>>,
    /// Fired with the product id when add-to-cart is activated in stock.
    #[prop(optional, into)]
    on_add_to_cart: Option<Callback<ProductId>>,
) -> impl IntoView {
    let Some(product) = product else {
        return ().into_any();
    };

    let model = CardModel::new(&product, &use_display_config().price_format());
    let events = CardEvents::new(model.id, model.stock)
        .with_like_toggle(on_like_toggle)
        .with_quick_view(on_quick_view)
        .with_add_to_cart(on_add_to_cart);

    match view_mode {
        ViewMode::Grid => view! { <GridCard model=model events=events is_liked=is_liked/> }.into_any(),
        ViewMode::List => view! { <ListCard model=model events=events is_liked=is_liked/> }.into_any(),
    }
}

#[component]
fn GridCard(model: CardModel, events: CardEvents, is_liked: Signal<bool>) -> impl IntoView {
    let stock_class = model.stock_class();
    let stock_label = model.stock_label();
    let purchasable = model.purchasable();
    let CardModel {
        id,
        name,
        href,
        category_label,
        description: _,
        price_label,
        stock,
        image_url,
    } = model;
    let image_alt = name.clone();
    let media_href = href.clone();

    // Hover controls sit inside the image link; opacity reveals them so they
    // stay mounted and focusable.
    view! {
        <article
            class="product-card product-card--grid group"
            data-view-mode="grid"
            data-product-id=id.to_string()
            data-stock=stock.as_str()
        >
            <a href=media_href class="product-card__media aspect-square">
                <CardImage
                    src=image_url
                    alt=image_alt
                    class="product-card__image"
                    unavailable=stock.is_out_of_stock()
                />
                <div class="product-card__hover-actions opacity-0 group-hover:opacity-100 focus-within:opacity-100">
                    <QuickViewButton events=events/>
                    <LikeButton events=events is_liked=is_liked/>
                </div>
            </a>
            <div class="product-card__body">
                <a href=href class="product-card__name line-clamp-2">{name}</a>
                <p class="product-card__category">{category_label}</p>
                <p class=stock_class>{stock_label}</p>
                <p class="product-card__price">{price_label}</p>
                <AddToCartButton
                    events=events
                    label=stock.cart_label()
                    purchasable=purchasable
                    class="product-card__cart w-full"
                />
            </div>
        </article>
    }
}

#[component]
fn ListCard(model: CardModel, events: CardEvents, is_liked: Signal<bool>) -> impl IntoView {
    let stock_class = model.stock_class();
    let stock_label = model.stock_label();
    let purchasable = model.purchasable();
    let CardModel {
        id,
        name,
        href,
        category_label,
        description,
        price_label,
        stock,
        image_url,
    } = model;
    let image_alt = name.clone();
    let media_href = href.clone();

    view! {
        <article
            class="product-card product-card--list"
            data-view-mode="list"
            data-product-id=id.to_string()
            data-stock=stock.as_str()
        >
            <a href=media_href class="product-card__thumb">
                <CardImage
                    src=image_url
                    alt=image_alt
                    class="product-card__thumb-image"
                    unavailable=stock.is_out_of_stock()
                />
            </a>
            <div class="product-card__details">
                <a href=href class="product-card__name">{name}</a>
                <p class="product-card__category">{category_label}</p>
                <p class="product-card__description line-clamp-2">{description}</p>
                <div class="product-card__meta">
                    <span class="product-card__price">{price_label}</span>
                    <span class=stock_class>{stock_label}</span>
                </div>
            </div>
            <div class="product-card__actions">
                <LikeButton events=events is_liked=is_liked/>
                <QuickViewButton events=events/>
                <AddToCartButton
                    events=events
                    label=stock.cart_label()
                    purchasable=purchasable
                    class="product-card__cart"
                />
            </div>
        </article>
    }
}

#[component]
fn LikeButton(events: CardEvents, is_liked: Signal<bool>) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || if is_liked.get() { "like-button is-liked" } else { "like-button" }
            aria-label="Like"
            aria-pressed=move || is_liked.get().to_string()
            on:click=move |ev| events.like(&ev)
        >
            {move || if is_liked.get() { "♥" } else { "♡" }}
        </button>
    }
}

#[component]
fn QuickViewButton(events: CardEvents) -> impl IntoView {
    view! {
        <button
            type="button"
            class="quick-view-button"
            aria-label="Quick view"
            on:click=move |ev| events.quick_view(&ev)
        >
            "Quick view"
        </button>
    }
}

#[component]
fn AddToCartButton(
    events: CardEvents,
    label: &'static str,
    purchasable: bool,
    #[prop(into)] class: String,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=class
            disabled={!purchasable}
            data-purchasable=purchasable.to_string()
            on:click=move |ev| events.add_to_cart(&ev)
        >
            {label}
        </button>
    }
}
