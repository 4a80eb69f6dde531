//! Server-rendered HTML of the catalog components.

use std::sync::Arc;

use leptos::prelude::*;
#[allow(unused_imports)]
use leptos::tachys::view::RenderHtml;
use storefront_catalog::{decode_products, CategoryId, CategoryRef, Product, ProductId};
use storefront_data::{SharedCatalogSource, StaticCatalogSource};
use storefront_ui::{
    featured_products, provide_storefront, CatalogPage, CatalogState, DisplayConfig, Favorites,
    ProductCard, ProductSection, StorefrontConfig, ViewMode,
};

fn render_card(product: Option<Product>, view_mode: ViewMode) -> String {
    let owner = Owner::new();
    owner.with(|| view! { <ProductCard product=product view_mode=view_mode/> }.to_html())
}

fn product(stock: i64) -> Product {
    Product::new(1, "A", 1000.0, stock)
        .with_description("Hand thrown stoneware")
        .with_image("https://cdn.example.com/a.png")
}

#[test]
fn test_absent_product_renders_nothing() {
    let html = render_card(None, ViewMode::Grid);
    assert!(!html.contains("product-card"));
}

#[test]
fn test_out_of_stock_grid_card() {
    let html = render_card(Some(product(0)), ViewMode::Grid);

    assert!(html.contains(r#"data-view-mode="grid""#));
    assert!(html.contains(r#"data-overlay="out-of-stock""#));
    assert!(html.contains("Unavailable"));
    assert!(html.contains(r#"data-purchasable="false""#));
    assert!(html.contains("uncategorized"));
    assert!(html.contains("1,000원"));
    assert!(html.contains(r#"href="/product/1""#));
}

#[test]
fn test_low_stock_label_in_both_modes() {
    for mode in [ViewMode::Grid, ViewMode::List] {
        let html = render_card(Some(product(3)), mode);
        assert!(html.contains("Only 3 left"), "{mode:?}");
        assert!(html.contains("stock-low"), "{mode:?}");
        assert!(html.contains("Add to Cart"), "{mode:?}");
        assert!(!html.contains("data-overlay"), "{mode:?}");
    }
}

#[test]
fn test_exactly_one_branch_rendered() {
    let grid = render_card(Some(product(10)), ViewMode::Grid);
    let list = render_card(Some(product(10)), ViewMode::List);

    assert!(grid.contains(r#"data-view-mode="grid""#));
    assert!(!grid.contains(r#"data-view-mode="list""#));
    assert!(list.contains(r#"data-view-mode="list""#));
    assert!(!list.contains(r#"data-view-mode="grid""#));

    // Only the list row shows the description.
    assert!(list.contains("Hand thrown stoneware"));
    assert!(!grid.contains("Hand thrown stoneware"));
}

#[test]
fn test_fresh_mount_starts_loading() {
    for mode in [ViewMode::Grid, ViewMode::List] {
        let html = render_card(Some(product(10)), mode);
        assert!(html.contains("card-image__spinner"), "{mode:?}");
        assert!(html.contains("opacity-0"), "{mode:?}");
    }
}

#[test]
fn test_controls_always_mounted() {
    let html = render_card(Some(product(10)), ViewMode::Grid);
    assert!(html.contains(r#"aria-label="Quick view""#));
    assert!(html.contains(r#"aria-label="Like""#));
    assert!(html.contains(r#"class="product-card product-card--grid group""#));
    assert!(html.contains("group-hover:opacity-100"));
}

#[test]
fn test_category_and_display_config() {
    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(DisplayConfig {
            currency_suffix: " KRW".to_string(),
            ..DisplayConfig::default()
        });
        let product = product(10).with_category(CategoryRef {
            id: CategoryId::new(4),
            name: "Ceramics".to_string(),
        });
        view! { <ProductCard product=product view_mode=ViewMode::List/> }.to_html()
    });

    assert!(html.contains("Ceramics"));
    assert!(!html.contains("uncategorized"));
    assert!(html.contains("1,000 KRW"));
}

#[test]
fn test_catalog_page_section_order() {
    let owner = Owner::new();
    let html = owner.with(|| {
        let source: SharedCatalogSource = Arc::new(StaticCatalogSource::new(vec![product(3)]));
        provide_storefront(StorefrontConfig::default(), source);
        view! { <CatalogPage/> }.to_html()
    });

    let slider = html.find("promo-slider").unwrap();
    let featured = html.find(r#"data-section="featured""#).unwrap();
    let all = html.find(r#"data-section="all-products""#).unwrap();
    assert!(slider < featured && featured < all);

    // The catalog is fetched after mount, so server output has no cards.
    assert!(!html.contains("product-card"));
}

const SOLD_OUT_CATALOG: &[u8] = br#"[
    {"id": 1, "name": "A", "category": null, "price": 1000, "stock": 0, "imageUrl": "https://cdn.example.com/a.png"}
]"#;

fn render_section(title: &str, products: Vec<Product>, favorites: Favorites) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let favorites = RwSignal::new(favorites);
        let on_quick_view = Callback::new(|_: ProductId| {});
        view! {
            <ProductSection
                title=title.to_string()
                products=Signal::stored(products)
                favorites=favorites
                on_quick_view=on_quick_view
            />
        }
        .to_html()
    })
}

fn card_count(html: &str) -> usize {
    html.matches("product-card product-card--").count()
}

#[test]
fn test_loaded_catalog_renders_one_card_per_section() {
    let catalog = CatalogState::Ready(decode_products(SOLD_OUT_CATALOG).unwrap());

    let featured = render_section(
        "Featured",
        featured_products(catalog.products()).to_vec(),
        Favorites::default(),
    );
    let all = render_section("All Products", catalog.products().to_vec(), Favorites::default());

    for html in [&featured, &all] {
        assert_eq!(card_count(html), 1);
        assert!(html.contains(r#"data-overlay="out-of-stock""#));
        assert!(html.contains(r#"data-purchasable="false""#));
        assert!(html.contains("Unavailable"));
        assert!(html.contains("uncategorized"));
        assert!(html.contains("1,000원"));
    }
    assert!(featured.contains("Featured"));
    assert!(all.contains("All Products"));
}

#[test]
fn test_failed_catalog_renders_no_cards() {
    let catalog = CatalogState::Failed("HTTP 500: boom".to_string());

    let html = render_section("All Products", catalog.products().to_vec(), Favorites::default());

    assert_eq!(card_count(&html), 0);
    assert!(html.contains("All Products"));
}

#[test]
fn test_section_keeps_catalog_order_and_liked_flags() {
    let mut favorites = Favorites::default();
    favorites.toggle(ProductId::new(2));
    let products = vec![product(10), Product::new(2, "B", 500.0, 4), Product::new(3, "C", 700.0, 0)];

    let html = render_section("All Products", products, favorites);

    assert_eq!(card_count(&html), 3);
    let first = html.find(r#"data-product-id="1""#).unwrap();
    let second = html.find(r#"data-product-id="2""#).unwrap();
    let third = html.find(r#"data-product-id="3""#).unwrap();
    assert!(first < second && second < third);
    assert_eq!(html.matches(r#"aria-pressed="true""#).count(), 1);
}
