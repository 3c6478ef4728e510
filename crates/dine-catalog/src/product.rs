//! Menu products.

use serde::{Deserialize, Serialize};

use crate::addon::AddonConfig;
use crate::ids::{CategoryId, DocumentId, ProductId};
use crate::media::Media;
use crate::price::format_price;
use crate::wire::null_as_default;

/// Listing fields shared by every product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseInfo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

/// Reference from a product to its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: CategoryId,
}

/// A menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub document_id: DocumentId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_info: BaseInfo,
    /// Long description shown on the detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
    /// Add-on configuration, in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub adon_config: Vec<AddonConfig>,
}

impl Product {
    pub fn new(id: u64, document_id: impl Into<DocumentId>, item_name: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            document_id: document_id.into(),
            item_name: item_name.into(),
            base_info: BaseInfo::default(),
            description: None,
            image: None,
            category: None,
            adon_config: Vec::new(),
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.base_info.price = price;
        self
    }

    pub fn in_category(mut self, id: u64) -> Self {
        self.category = Some(CategoryRef {
            id: CategoryId::new(id),
        });
        self
    }

    pub fn with_image(mut self, image: Media) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_addon(mut self, config: AddonConfig) -> Self {
        self.adon_config.push(config);
        self
    }

    /// Category this product is listed under, if any.
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category.map(|c| c.id)
    }

    /// Products without an explicit flag are available.
    pub fn is_available(&self) -> bool {
        self.base_info.is_available.unwrap_or(true)
    }

    /// Badge text, if set and non-blank.
    pub fn display_tag(&self) -> Option<&str> {
        self.base_info
            .display_tag
            .as_deref()
            .filter(|tag| !tag.trim().is_empty())
    }

    /// Description for the detail page: the long form when present.
    pub fn detail_description(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => &self.base_info.description,
        }
    }

    /// Listing card price, e.g. `Rs 250.00`.
    pub fn price_label(&self) -> String {
        format_price(self.base_info.price)
    }

    /// Link to the detail page.
    pub fn detail_path(&self) -> String {
        format!("/product/{}", self.document_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addon::SelectionType;
    use serde_json::json;

    #[test]
    fn test_deserialize_listing_record() {
        let product: Product = serde_json::from_value(json!({
            "id": 10,
            "documentId": "p10",
            "itemName": "Zinger Burger",
            "baseInfo": {
                "description": "Crispy fillet",
                "price": 650,
                "displayTag": "Bestseller"
            },
            "image": { "id": 4, "url": "/uploads/zinger.png" },
            "category": { "id": 2, "Name": "Burgers" },
            "metaData": null
        }))
        .unwrap();

        assert_eq!(product.document_id.as_str(), "p10");
        assert_eq!(product.category_id(), Some(CategoryId::new(2)));
        assert_eq!(product.display_tag(), Some("Bestseller"));
        assert_eq!(product.price_label(), "Rs 650.00");
        assert!(product.is_available());
        assert!(product.adon_config.is_empty());
        assert_eq!(product.detail_path(), "/product/p10");
    }

    #[test]
    fn test_nulls_become_defaults() {
        let product: Product = serde_json::from_value(json!({
            "id": 1,
            "documentId": "x",
            "itemName": "Fries",
            "baseInfo": null,
            "category": null,
            "adonConfig": null
        }))
        .unwrap();

        assert_eq!(product.base_info, BaseInfo::default());
        assert_eq!(product.category_id(), None);
        assert!(product.adon_config.is_empty());
    }

    #[test]
    fn test_availability_flag() {
        let mut product = Product::new(1, "x", "Fries");
        product.base_info.is_available = Some(false);
        assert!(!product.is_available());
    }

    #[test]
    fn test_detail_description_fallback() {
        let mut product = Product::new(1, "x", "Fries");
        product.base_info.description = "Short".into();
        assert_eq!(product.detail_description(), "Short");

        product.description = Some("Long story".into());
        assert_eq!(product.detail_description(), "Long story");
    }

    #[test]
    fn test_blank_display_tag_is_hidden() {
        let mut product = Product::new(1, "x", "Fries");
        product.base_info.display_tag = Some(" ".into());
        assert_eq!(product.display_tag(), None);
    }

    #[test]
    fn test_deserialize_addon_config() {
        let product: Product = serde_json::from_value(json!({
            "id": 5,
            "documentId": "p5",
            "itemName": "Pizza",
            "adonConfig": [
                { "id": 1, "required": true, "selectionType": "multiple", "addon_group": { "documentId": "a1" } },
                { "id": 2, "addon_group": null }
            ]
        }))
        .unwrap();

        assert_eq!(product.adon_config.len(), 2);
        assert!(product.adon_config[0].is_required());
        assert_eq!(product.adon_config[0].selection_type(), SelectionType::Multiple);
        assert_eq!(product.adon_config[1].group_document_id(), None);
    }
}
