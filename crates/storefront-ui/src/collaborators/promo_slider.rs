use leptos::prelude::*;

use crate::config::Promotion;

/// Promotional banner carousel.
///
/// Independent of the catalog; shows the configured slides one at a time.
#[component]
pub fn PromoSlider(#[prop(into)] promotions: Vec<Promotion>) -> impl IntoView {
    let count = promotions.len();
    let current = RwSignal::new(0usize);

    let slides = promotions
        .into_iter()
        .enumerate()
        .map(|(index, promo)| {
            let image = view! { <img src=promo.image_url alt=promo.title.clone()/> };
            let body = match promo.link {
                Some(link) => view! { <a href=link>{image}</a> }.into_any(),
                None => image.into_any(),
            };
            view! {
                <li
                    class="promo-slider__slide"
                    class:is-active=move || current.get() == index
                    aria-hidden=move || (current.get() != index).to_string()
                >
                    {body}
                </li>
            }
        })
        .collect::<Vec<_>>();

    let step = move |delta: isize| {
        if count > 0 {
            current.update(|i| *i = (*i as isize + delta).rem_euclid(count as isize) as usize);
        }
    };

    view! {
        <div class="promo-slider" role="region" aria-roledescription="carousel">
            <ul class="promo-slider__track">{slides}</ul>
            <Show when=move || { count > 1 }>
                <button type="button" class="promo-slider__prev" aria-label="Previous slide" on:click=move |_| step(-1)>
                    "‹"
                </button>
                <button type="button" class="promo-slider__next" aria-label="Next slide" on:click=move |_| step(1)>
                    "›"
                </button>
            </Show>
        </div>
    }
}
