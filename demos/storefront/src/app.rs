//! Application shell and routes.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use storefront_ui::{provide_storefront, CatalogPage, StorefrontConfig, ViewMode};

use crate::source::ServerFnSource;

const DEMO_CONFIG: &str = include_str!("../storefront.toml");

/// Configuration compiled into both the server and the browser bundle.
pub fn demo_config() -> anyhow::Result<StorefrontConfig> {
    use anyhow::Context;
    StorefrontConfig::from_toml(DEMO_CONFIG).context("Failed to parse embedded storefront.toml")
}

#[cfg(feature = "ssr")]
pub fn shell(options: leptos::config::LeptosOptions) -> impl IntoView {
    use leptos::hydration::{AutoReload, HydrationScripts};
    use leptos::view;

    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options.clone() root=""/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = demo_config().unwrap_or_else(|e| {
        leptos::logging::warn!("{:#}; using defaults", e);
        StorefrontConfig::default()
    });
    provide_storefront(config, Arc::new(ServerFnSource));

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront_demo.css"/>
        <Title text="Storefront"/>

        <Router>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

/// Catalog page with a grid/list switch.
///
/// Switching remounts the page, which fetches the catalog again.
#[component]
fn HomePage() -> impl IntoView {
    let mode = RwSignal::new(ViewMode::Grid);

    view! {
        <div class="view-toggle">
            <button
                type="button"
                aria-pressed=move || (mode.get() == ViewMode::List).to_string()
                on:click=move |_| mode.update(|m| *m = m.toggled())
            >
                {move || match mode.get() {
                    ViewMode::Grid => "Show as list",
                    ViewMode::List => "Show as grid",
                }}
            </button>
        </div>
        {move || view! { <CatalogPage view_mode=mode.get()/> }}
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_wasi::response::ResponseOptions>() {
            resp.set_status(leptos_wasi::prelude::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to the catalog"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = demo_config().unwrap();
        assert_eq!(config.display.promotions.len(), 2);
        assert_eq!(config.api.products_url(), "http://127.0.0.1:8080/api/products");
    }
}
