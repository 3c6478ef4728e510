//! Listing page sections.

use dine_catalog::{Category, Product};
use dine_core::StorefrontConfig;

use crate::html::{escape_html, image_loading_attrs};

const HEART_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" width="24" height="24" aria-hidden="true"><path stroke-linecap="round" stroke-linejoin="round" d="M21 8.25c0-2.485-2.099-4.5-4.688-4.5-1.935 0-3.597 1.126-4.312 2.733-.715-1.607-2.377-2.733-4.313-2.733C5.1 3.75 3 5.765 3 8.25c0 7.22 9 12 9 12s9-4.78 9-12Z"/></svg>"#;

/// Render one category section with its product cards.
pub fn render_category_section(
    category: &Category,
    products: &[Product],
    config: &StorefrontConfig,
) -> String {
    let image_html = match &category.image {
        Some(image) => format!(
            r#"<div class="category-banner"><img src="{src}" alt="{alt}" width="2000" height="2000" {loading}></div>"#,
            src = escape_html(&config.media_url(&image.url)),
            alt = escape_html(image.alt_or(non_empty_or(&category.name, "Category Image"))),
            loading = image_loading_attrs(image.id)
        ),
        None => String::new(),
    };

    let cards: String = products
        .iter()
        .map(|product| render_product_card(product, category, config))
        .collect();

    format!(
        r#"<section id="{anchor}" class="category-section" data-section="category">
    <h2 class="category-title">{name}</h2>
    {image_html}
    <div class="product-grid">{cards}</div>
</section>"#,
        anchor = category.anchor_id(),
        name = escape_html(&category.name),
        image_html = image_html,
        cards = cards
    )
}

/// Render a product card linking to the detail page.
///
/// Card images load with the priority of the enclosing category's banner,
/// or of their own upload when the category has none.
pub fn render_product_card(product: &Product, category: &Category, config: &StorefrontConfig) -> String {
    let alt = non_empty_or(&product.item_name, "Product Image");
    let image_html = match &product.image {
        Some(image) => format!(
            r#"<img src="{src}" alt="{alt}" class="product-card-image" {loading}>"#,
            src = escape_html(&config.media_url(&image.url)),
            alt = escape_html(alt),
            loading = image_loading_attrs(category.image.as_ref().map_or(image.id, |banner| banner.id))
        ),
        None => r#"<div class="product-card-placeholder"></div>"#.to_string(),
    };

    let tag_html = product
        .display_tag()
        .map(|tag| format!(r#"<span class="product-tag">{}</span>"#, escape_html(tag)))
        .unwrap_or_default();

    format!(
        r#"<a href="{href}" class="product-card">
    <div class="product-card-media">{image_html}{tag_html}</div>
    <div class="product-card-body">
        <div>
            <h3 class="product-card-name">{name}</h3>
            <p class="product-card-description">{description}</p>
        </div>
        <div class="product-card-actions">
            <span class="product-price">{price}</span>
            <div class="product-card-buttons">
                <span class="add-to-cart">Add To Cart</span>
                <button type="button" class="favourite" aria-label="Add to favourites">{heart}</button>
            </div>
        </div>
    </div>
</a>"#,
        href = escape_html(&product.detail_path()),
        image_html = image_html,
        tag_html = tag_html,
        name = escape_html(&product.item_name),
        description = escape_html(&product.base_info.description),
        price = product.price_label(),
        heart = HEART_ICON
    )
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
