use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_catalog::Category;

use crate::context::{use_catalog_source, use_logger};

/// Horizontally scrollable row of category links.
///
/// Loads categories from the catalog source in context once per mount.
/// Renders nothing until categories arrive; a failed load is only logged.
#[component]
pub fn CategoryStrip() -> impl IntoView {
    let source = use_catalog_source();
    let logger = use_logger("CategoryStrip");
    let categories = RwSignal::new(Vec::<Category>::new());

    Effect::new(move |_| {
        let Some(source) = source.clone() else {
            logger.warn("No catalog source in context; category strip stays empty");
            return;
        };
        let logger = logger.clone();
        spawn_local(async move {
            match source.list_categories().await {
                Ok(list) => {
                    logger
                        .debug_builder("Categories loaded")
                        .field_i64("categories", list.len() as i64)
                        .emit();
                    let _ = categories.try_set(list);
                }
                Err(e) => logger
                    .warn_builder("Category fetch failed")
                    .field("error", e.to_string())
                    .emit(),
            }
        });
    });

    view! {
        <Show when=move || categories.with(|c| !c.is_empty())>
            <nav class="category-strip" aria-label="Browse categories">
                <ul class="category-strip__row overflow-x-auto">
                    <For
                        each=move || categories.get()
                        key=|category| category.id
                        children=move |category: Category| {
                            let href = category.browse_path();
                            view! {
                                <li class="category-strip__item">
                                    <a href=href>
                                        {category.image_url.map(|src| view! { <img src=src alt="" loading="lazy"/> })}
                                        <span>{category.name}</span>
                                    </a>
                                </li>
                            }
                        }
                    />
                </ul>
            </nav>
        </Show>
    }
}
