//! Image load transition.

use leptos::prelude::*;

use crate::context::use_logger;

/// Load state of a card image. Moves forward only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageLoadState {
    #[default]
    Loading,
    Loaded,
}

impl ImageLoadState {
    /// Record that the image finished loading.
    ///
    /// Returns `true` only for the transition out of `Loading`.
    pub fn mark_loaded(&mut self) -> bool {
        match self {
            ImageLoadState::Loading => {
                *self = ImageLoadState::Loaded;
                true
            }
            ImageLoadState::Loaded => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ImageLoadState::Loading)
    }

    /// Whether the placeholder spinner covers the image.
    pub fn shows_spinner(&self) -> bool {
        self.is_loading()
    }

    /// The image is fetched but invisible until loaded, so it keeps its box.
    pub fn opacity_class(&self) -> &'static str {
        match self {
            ImageLoadState::Loading => "opacity-0",
            ImageLoadState::Loaded => "opacity-100",
        }
    }
}

/// Apply the load signal to a card's image state.
///
/// Returns `true` only for the first load; a disposed card ignores it.
pub(crate) fn record_load(state: RwSignal<ImageLoadState>) -> bool {
    state.try_update(ImageLoadState::mark_loaded).unwrap_or(false)
}

/// Image region with spinner, fade-in and optional unavailable overlay.
///
/// Load state lives in this component, so every mount starts at `Loading`.
#[component]
pub(crate) fn CardImage(
    src: String,
    alt: String,
    #[prop(into)] class: String,
    #[prop(optional)] unavailable: bool,
) -> impl IntoView {
    let state = RwSignal::new(ImageLoadState::Loading);
    let logger = use_logger("CardImage");
    let logged_src = src.clone();

    view! {
        <div class="card-image">
            <Show when=move || state.get().shows_spinner()>
                <div class="card-image__spinner" role="status" aria-label="Loading image"></div>
            </Show>
            <img
                src=src
                alt=alt
                loading="lazy"
                class=move || format!("{} object-cover {}", class, state.get().opacity_class())
                on:load=move |_| {
                    if record_load(state) {
                        logger.debug_builder("Image loaded").field("src", logged_src.as_str()).emit();
                    }
                }
            />
            {unavailable.then(|| view! {
                <div class="card-image__overlay" data-overlay="out-of-stock">
                    <span>"Out of Stock"</span>
                </div>
            })}
        </div>
    }
}
