//! The catalog page.

mod layout;
mod state;

pub use layout::{featured_products, PageLayout, PageSection};
pub use state::{load_catalog, CatalogState};

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_catalog::{Product, ProductId};

use crate::collaborators::{CategoryStrip, PromoSlider, QuickViewPanel};
use crate::context::{use_catalog_source, use_display_config, use_logger};
use crate::favorites::Favorites;
use crate::section::ProductSection;
use crate::view_mode::ViewMode;

/// Storefront landing page: promotions, categories, featured and all products.
///
/// Loads through an `Effect` and `spawn_local` rather than a `Resource`, so the
/// fetch runs only in the browser after mount and never holds back rendering.
/// The product collection is fetched once per mount.
/// Until the fetch settles, and after a failed one, the sections are empty.
#[component]
pub fn CatalogPage(
    /// Layout used by both product sections.
    #[prop(optional)]
    view_mode: ViewMode,
) -> impl IntoView {
    let display = use_display_config();
    let source = use_catalog_source();
    let logger = use_logger("CatalogPage");

    let catalog = RwSignal::new(CatalogState::Idle);
    let favorites = RwSignal::new(Favorites::default());
    let selected = RwSignal::new(None::<ProductId>);

    // No reactive reads, so this runs once after mount (never on the server).
    Effect::new(move |_| {
        let Some(source) = source.clone() else {
            logger.error("No catalog source in context");
            catalog.set(CatalogState::Failed("no catalog source".to_string()));
            return;
        };
        catalog.set(CatalogState::Loading);
        let logger = logger.clone();
        spawn_local(async move {
            let next = load_catalog(source.as_ref(), &logger).await;
            if catalog.try_set(next).is_some() {
                logger.debug("Page unmounted before catalog settled; result dropped");
            }
        });
    });

    let all_products = Signal::derive(move || catalog.with(|c| c.products().to_vec()));
    let featured = Signal::derive(move || catalog.with(|c| featured_products(c.products()).to_vec()));
    let quick_view_product = Signal::derive(move || {
        selected
            .get()
            .and_then(|id| catalog.with(|c| c.find(id).cloned()))
    });
    let open_quick_view = Callback::new(move |id: ProductId| selected.set(Some(id)));
    let close_quick_view = Callback::new(move |_: ()| selected.set(None));

    let sections = PageLayout::from_config(&display)
        .sections()
        .into_iter()
        .map(|section| match section {
            PageSection::PromoSlider => {
                view! { <PromoSlider promotions=display.promotions.clone()/> }.into_any()
            }
            PageSection::CategoryStrip => view! { <CategoryStrip/> }.into_any(),
            PageSection::Featured { title } => {
                product_section(title, "featured", featured, view_mode, favorites, open_quick_view)
            }
            PageSection::AllProducts { title } => {
                product_section(title, "all-products", all_products, view_mode, favorites, open_quick_view)
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="catalog-page" aria-busy=move || catalog.with(|c| c.is_loading()).to_string()>
            {sections}
            <QuickViewPanel product=quick_view_product on_close=close_quick_view/>
        </div>
    }
}

fn product_section(
    title: String,
    section_id: &'static str,
    products: Signal<Vec<Product>>,
    view_mode: ViewMode,
    favorites: RwSignal<Favorites>,
    on_quick_view: Callback<ProductId>,
) -> AnyView {
    view! {
        <ProductSection
            title=title
            section_id=section_id
            products=products
            view_mode=view_mode
            favorites=favorites
            on_quick_view=on_quick_view
        />
    }
    .into_any()
}
