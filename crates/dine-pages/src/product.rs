//! Product detail page.

use dine_catalog::{resolve_addons, AddonGroup, Media, Product, ResolvedAddon};
use dine_core::StorefrontConfig;
use dine_data::{ContentClient, ContentQuery, FetchPolicy, HttpTransport, Populate};
use dine_ui::product::{
    render_add_to_cart, render_addon_group, render_breadcrumb, render_media, render_summary,
};
use dine_ui::{render_navbar, HeadContent, Shell, STOREFRONT_STYLES};
use serde::Deserialize;

use crate::error::PageError;

/// A product with its add-ons resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    pub product: Product,
    pub addons: Vec<ResolvedAddon>,
}

/// Record shape of the image-only product query.
#[derive(Debug, Deserialize)]
struct ImageRecord {
    #[serde(default)]
    image: Option<Media>,
}

fn details_query(document_id: &str) -> ContentQuery {
    ContentQuery::collection("products")
        .filter_eq("documentId", document_id)
        .populate(Populate::Deep("adonConfig".into()))
}

fn image_query(document_id: &str) -> ContentQuery {
    ContentQuery::collection("products")
        .filter_eq("documentId", document_id)
        .populate(Populate::Field("image".into()))
}

fn addons_query() -> ContentQuery {
    ContentQuery::collection("addons").populate(Populate::Relation("addonOptions".into()))
}

/// Fetch a product, its image and the add-on catalog concurrently.
///
/// The image from the image query replaces whatever the details query
/// returned. No matching product yields [`PageError::NotFound`].
pub async fn load_product<T: HttpTransport>(
    client: &ContentClient<T>,
    document_id: &str,
) -> Result<ProductDetail, PageError> {
    if document_id.is_empty() {
        return Err(PageError::NotFound(document_id.to_string()));
    }

    let policy = FetchPolicy::NoStore;
    let details = details_query(document_id);
    let image = image_query(document_id);
    let addons = addons_query();

    let (products, images, catalog): (Vec<Product>, Vec<ImageRecord>, Vec<AddonGroup>) = futures::try_join!(
        client.fetch_collection(&details, &policy),
        client.fetch_collection(&image, &policy),
        client.fetch_collection(&addons, &policy),
    )?;

    let Some(mut product) = products.into_iter().next() else {
        client
            .logger()
            .info_builder("Product not found")
            .field("document_id", document_id)
            .emit();
        return Err(PageError::NotFound(document_id.to_string()));
    };
    product.image = images.into_iter().next().and_then(|record| record.image);

    let addons = resolve_addons(&product.adon_config, &catalog);
    client
        .logger()
        .debug_builder("Product loaded")
        .field("document_id", document_id)
        .field_i64("addons", addons.len() as i64)
        .field_bool("available", product.is_available())
        .emit();

    Ok(ProductDetail { product, addons })
}

/// Render the product detail page document.
pub fn render_product(detail: &ProductDetail, config: &StorefrontConfig) -> String {
    let product = &detail.product;

    let addon_sections: String = detail.addons.iter().map(render_addon_group).collect();

    let body = format!(
        r#"<header class="site-header">
{navbar}
</header>
<main class="product-page" data-document-id="{document_id}">
    {breadcrumb}
    <form class="product-layout" action="" onsubmit="return false;">
        <div class="product-column">
            {summary}
            {media}
        </div>
        <div class="product-column">
            {addon_sections}
            {add_to_cart}
        </div>
    </form>
</main>"#,
        navbar = render_navbar(),
        document_id = dine_ui::escape_html(product.document_id.as_str()),
        breadcrumb = render_breadcrumb(&product.item_name),
        summary = render_summary(product),
        media = render_media(product, config),
        addon_sections = addon_sections,
        add_to_cart = render_add_to_cart(product.is_available())
    );

    Shell::new(
        HeadContent::new(product.item_name.clone())
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(STOREFRONT_STYLES),
    )
    .render(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dine_data::testing::MockTransport;
    use futures::executor::block_on;
    use serde_json::json;

    const BASE: &str = "https://cms.example.com/api";
    const DETAILS_URL: &str =
        "https://cms.example.com/api/products?filters[documentId][$eq]=p1&populate[adonConfig][populate]=*";
    const IMAGE_URL: &str = "https://cms.example.com/api/products?filters[documentId][$eq]=p1&populate=image";
    const ADDONS_URL: &str = "https://cms.example.com/api/addons?populate[addonOptions]=*";

    fn addons_body() -> serde_json::Value {
        json!({ "data": [
            { "id": 1, "documentId": "a1", "name": "Sauces",
              "addonOptions": [ { "id": 11, "title": "Garlic", "price": 50 }, { "id": 12, "title": "Mint", "price": null } ] },
            { "id": 2, "documentId": "a2", "name": "Drinks", "addonOptions": [] }
        ]})
    }

    fn product_transport() -> MockTransport {
        MockTransport::new()
            .with_json(
                DETAILS_URL,
                200,
                json!({ "data": [ {
                    "id": 1, "documentId": "p1", "itemName": "Chicken Karahi",
                    "baseInfo": { "description": "Spicy", "price": 1800, "displayTag": "Chef's pick" },
                    "description": "Slow cooked in a wok",
                    "image": null,
                    "adonConfig": [
                        { "id": 1, "required": true, "selectionType": "multiple", "addon_group": { "documentId": "a1" } },
                        { "id": 2, "addon_group": { "documentId": "gone" } }
                    ]
                } ]}),
            )
            .with_json(
                IMAGE_URL,
                200,
                json!({ "data": [ { "id": 1, "documentId": "p1", "image": { "id": 8, "url": "/uploads/karahi.jpg" } } ] }),
            )
            .with_json(ADDONS_URL, 200, addons_body())
    }

    #[test]
    fn test_load_merges_image_and_resolves_addons() {
        let client = ContentClient::with_transport(BASE, product_transport());
        let detail = block_on(load_product(&client, "p1")).unwrap();

        assert_eq!(detail.product.item_name, "Chicken Karahi");
        assert_eq!(detail.product.image.as_ref().map(|m| m.url.as_str()), Some("/uploads/karahi.jpg"));
        assert_eq!(detail.addons.len(), 1);
        assert_eq!(detail.addons[0].name(), "Sauces");
        assert!(detail.addons[0].required);
    }

    #[test]
    fn test_fetches_are_no_store() {
        let store = std::sync::Arc::new(dine_cache::ResponseStore::new());
        let client = ContentClient::with_transport(BASE, product_transport()).with_store(store.clone());
        block_on(load_product(&client, "p1")).unwrap();
        block_on(load_product(&client, "p1")).unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 6);
        assert!(requests.iter().all(|r| r
            .headers
            .contains(&("Cache-Control".to_string(), "no-store".to_string()))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_product_is_not_found() {
        let transport = MockTransport::new()
            .with_json(DETAILS_URL, 200, json!({ "data": [] }))
            .with_json(IMAGE_URL, 200, json!({ "data": [] }))
            .with_json(ADDONS_URL, 200, addons_body());
        let client = ContentClient::with_transport(BASE, transport);

        let err = block_on(load_product(&client, "p1")).unwrap_err();
        assert!(matches!(err, PageError::NotFound(ref id) if id == "p1"));
    }

    #[test]
    fn test_empty_document_id_skips_fetching() {
        let client = ContentClient::with_transport(BASE, MockTransport::new());
        let err = block_on(load_product(&client, "")).unwrap_err();
        assert!(matches!(err, PageError::NotFound(_)));
    }

    #[test]
    fn test_addon_catalog_failure_fails_page() {
        let transport = product_transport().with_failure(ADDONS_URL, "connection reset");
        let client = ContentClient::with_transport(BASE, transport);
        let err = block_on(load_product(&client, "p1")).unwrap_err();
        assert!(matches!(err, PageError::Fetch(_)));
    }

    #[test]
    fn test_missing_image_record_clears_image() {
        let transport = product_transport().with_json(IMAGE_URL, 200, json!({ "data": [] }));
        let client = ContentClient::with_transport(BASE, transport);
        let detail = block_on(load_product(&client, "p1")).unwrap();
        assert!(detail.product.image.is_none());
    }

    #[test]
    fn test_render_product() {
        let config = StorefrontConfig::new(BASE);
        let client = ContentClient::with_transport(BASE, product_transport());
        let detail = block_on(load_product(&client, "p1")).unwrap();
        let html = render_product(&detail, &config);

        assert!(html.contains("<title>Chicken Karahi</title>"));
        assert!(html.contains(r#"<span class="breadcrumb-current">Chicken Karahi</span>"#));
        assert!(html.contains("Rs 1800.00"));
        assert!(html.contains("Chef&#39;s pick"));
        assert!(html.contains("Slow cooked in a wok"));
        assert!(html.contains(r#"src="https://cms.example.com/uploads/karahi.jpg""#));
        assert_eq!(html.matches(r#"type="checkbox""#).count(), 2);
        assert!(html.contains("Rs. 50.00"));
        assert!(html.contains(">Add to Cart</button>"));
        assert!(!html.contains("Drinks"));
    }

    #[test]
    fn test_render_unavailable_product() {
        let mut product = Product::new(2, "p2", "Seasonal Soup").with_price(300.0);
        product.base_info.is_available = Some(false);
        let detail = ProductDetail {
            product,
            addons: Vec::new(),
        };

        let html = render_product(&detail, &StorefrontConfig::new(BASE));
        assert!(html.contains(r#"disabled>Currently Unavailable</button>"#));
    }
}
