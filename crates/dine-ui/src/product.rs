//! Product detail page sections.

use dine_catalog::{Product, ResolvedAddon};
use dine_core::StorefrontConfig;

use crate::html::escape_html;

/// Breadcrumb: Home / product name.
pub fn render_breadcrumb(product_name: &str) -> String {
    format!(
        r#"<nav class="breadcrumb" aria-label="Breadcrumb"><a href="/">Home</a><span class="breadcrumb-sep">/</span><span class="breadcrumb-current">{}</span></nav>"#,
        escape_html(product_name)
    )
}

/// Name, price, badge and availability.
pub fn render_summary(product: &Product) -> String {
    let tag_html = product
        .display_tag()
        .map(|tag| format!(r#"<span class="product-tag">{}</span>"#, escape_html(tag)))
        .unwrap_or_default();

    let availability = if product.is_available() {
        r#"<span class="availability availability--in">Available</span>"#
    } else {
        r#"<span class="availability availability--out">Currently Unavailable</span>"#
    };

    format!(
        r#"<div class="product-summary">
    <h1 class="product-title">{name}</h1>
    <div class="product-meta"><span class="product-price">{price}</span>{tag_html}{availability}</div>
</div>"#,
        name = escape_html(&product.item_name),
        price = product.price_label(),
        tag_html = tag_html,
        availability = availability
    )
}

/// Product image and description column.
pub fn render_media(product: &Product, config: &StorefrontConfig) -> String {
    let image_html = match &product.image {
        Some(image) => format!(
            r#"<div class="product-image"><img src="{src}" alt="{alt}" loading="eager" fetchpriority="high"></div>"#,
            src = escape_html(&config.media_url(&image.url)),
            alt = escape_html(image.alt_or(&product.item_name))
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="product-media">
    {image_html}
    <div class="product-description"><p>{description}</p></div>
</div>"#,
        image_html = image_html,
        description = escape_html(product.detail_description())
    )
}

/// One add-on group as a fieldset of radio buttons or checkboxes.
pub fn render_addon_group(addon: &ResolvedAddon) -> String {
    let input_type = addon.selection_type.input_type();
    let input_name = addon.input_name();
    let required_attr = if addon.required { " required" } else { "" };

    let options: String = addon
        .options()
        .iter()
        .map(|option| {
            let price_html = option
                .price_label()
                .map(|price| format!(r#"<span class="addon-price">{}</span>"#, price))
                .unwrap_or_default();
            format!(
                r#"<div class="addon-option"><div class="addon-choice"><input type="{input_type}" id="{id}" name="{name}" value="{value}"{required}><label for="{id}">{title}</label></div>{price_html}</div>"#,
                input_type = input_type,
                id = option.input_id(),
                name = escape_html(&input_name),
                value = option.id,
                required = required_attr,
                title = escape_html(&option.title),
                price_html = price_html
            )
        })
        .collect();

    let badge = if addon.required {
        r#"<span class="addon-required">Required</span>"#
    } else {
        ""
    };

    format!(
        r#"<fieldset class="addon-group" data-addon-group="{document_id}" data-selection="{selection}">
    <div class="addon-header"><legend class="addon-name">{name}</legend>{badge}</div>
    <div class="addon-options">{options}</div>
</fieldset>"#,
        document_id = escape_html(addon.document_id().as_str()),
        selection = addon.selection_type.as_str(),
        name = escape_html(addon.name()),
        badge = badge,
        options = options
    )
}

/// Add-to-cart control. Disabled when the product is unavailable.
pub fn render_add_to_cart(available: bool) -> String {
    if available {
        r#"<div class="add-to-cart-bar"><button type="submit" class="add-to-cart-button">Add to Cart</button></div>"#
            .to_string()
    } else {
        r#"<div class="add-to-cart-bar"><button type="submit" class="add-to-cart-button" disabled>Currently Unavailable</button></div>"#
            .to_string()
    }
}
