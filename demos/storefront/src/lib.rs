//! Storefront catalog demo.
//!
//! Serves the catalog page from Spin, fetching the catalog through server
//! functions that call the catalog API with Spin outbound HTTP.

mod app;
mod source;

#[cfg(feature = "ssr")]
mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
