//! Menu listing page.

use dine_catalog::{Category, Product, ProductsByCategory};
use dine_core::StorefrontConfig;
use dine_data::{ContentClient, ContentQuery, FetchPolicy, HttpTransport, Populate};
use dine_ui::listing::render_category_section;
use dine_ui::{render_hero, CategorySlider, HeadContent, Shell, StaticHost, STOREFRONT_STYLES};

use crate::error::PageError;

const PAGE_TITLE: &str = "Food Delivery App";

/// Everything the listing page renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    /// Categories in content API order.
    pub categories: Vec<Category>,
    pub products: ProductsByCategory,
}

fn categories_query() -> ContentQuery {
    ContentQuery::collection("categories").populate(Populate::All)
}

fn products_query() -> ContentQuery {
    ContentQuery::collection("products").populate(Populate::All)
}

/// Fetch categories and products concurrently and group them.
///
/// Either fetch failing fails the page.
pub async fn load_listing<T: HttpTransport>(
    client: &ContentClient<T>,
    config: &StorefrontConfig,
) -> Result<ListingView, PageError> {
    let policy = FetchPolicy::revalidate_from(config);
    let by_category = categories_query();
    let all_products = products_query();

    let (categories, products): (Vec<Category>, Vec<Product>) = futures::try_join!(
        client.fetch_collection(&by_category, &policy),
        client.fetch_collection(&all_products, &policy),
    )?;

    let products = ProductsByCategory::group(&categories, products);
    client
        .logger()
        .info_builder("Listing loaded")
        .field_i64("categories", categories.len() as i64)
        .field_i64("products", products.product_count() as i64)
        .emit();

    Ok(ListingView {
        categories,
        products,
    })
}

/// Render the listing page document.
pub fn render_listing(view: &ListingView, config: &StorefrontConfig) -> String {
    let mut slider = CategorySlider::new();
    slider.set_categories(view.categories.clone(), &mut StaticHost);

    let sections: String = view
        .categories
        .iter()
        .map(|category| render_category_section(category, view.products.get(category.id), config))
        .collect();

    let body = format!(
        r#"{hero}
{slider}
<main id="main" class="listing">
{sections}
</main>"#,
        hero = render_hero(config),
        slider = slider.render(),
        sections = sections
    );

    let mut head = HeadContent::new(PAGE_TITLE)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_style(STOREFRONT_STYLES);
    if let Some(script) = &config.slider_script_url {
        head = head.with_module_loader(script);
    }

    Shell::new(head).render(&body)
}
