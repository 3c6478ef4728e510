//! Add-on groups and their resolution against a product's configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ids::{DocumentId, OptionId};
use crate::price::format_option_price;
use crate::wire::null_as_default;

/// How many options of a group a customer may pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    /// Any number of options.
    Multiple,
    /// Exactly one option. Unrecognised values fall back here.
    #[default]
    #[serde(other)]
    Single,
}

impl SelectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }

    /// HTML input type for this selection mode.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Single => "radio",
            Self::Multiple => "checkbox",
        }
    }
}

/// One selectable add-on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonOption {
    pub id: OptionId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl AddonOption {
    pub fn new(id: u64, title: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            id: OptionId::new(id),
            title: title.into(),
            price,
        }
    }

    /// Option price, e.g. `Rs. 50.00`.
    pub fn price_label(&self) -> Option<String> {
        self.price.map(format_option_price)
    }

    /// DOM id of the option's input.
    pub fn input_id(&self) -> String {
        format!("option-{}", self.id)
    }
}

/// A group of add-on options from the add-on catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonGroup {
    #[serde(default)]
    pub id: u64,
    pub document_id: DocumentId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub addon_options: Vec<AddonOption>,
}

impl AddonGroup {
    pub fn new(id: u64, document_id: impl Into<DocumentId>, name: impl Into<String>) -> Self {
        Self {
            id,
            document_id: document_id.into(),
            name: name.into(),
            addon_options: Vec::new(),
        }
    }

    pub fn with_option(mut self, option: AddonOption) -> Self {
        self.addon_options.push(option);
        self
    }
}

/// Reference from a product configuration to an add-on group.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonGroupRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<DocumentId>,
}

/// Per-product add-on configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddonConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addon_group: Option<AddonGroupRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, rename = "selectionType", skip_serializing_if = "Option::is_none")]
    pub selection_type: Option<SelectionType>,
}

impl AddonConfig {
    /// Configuration referencing the group with `document_id`.
    pub fn for_group(document_id: impl Into<DocumentId>) -> Self {
        Self {
            addon_group: Some(AddonGroupRef {
                document_id: Some(document_id.into()),
            }),
            required: None,
            selection_type: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn selection(mut self, selection_type: SelectionType) -> Self {
        self.selection_type = Some(selection_type);
        self
    }

    /// Referenced group, if the reference is present and non-empty.
    pub fn group_document_id(&self) -> Option<&DocumentId> {
        self.addon_group
            .as_ref()
            .and_then(|group| group.document_id.as_ref())
            .filter(|id| !id.is_empty())
    }

    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    pub fn selection_type(&self) -> SelectionType {
        self.selection_type.unwrap_or_default()
    }
}

/// An add-on group as configured for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAddon {
    pub group: AddonGroup,
    pub required: bool,
    pub selection_type: SelectionType,
}

impl ResolvedAddon {
    pub fn document_id(&self) -> &DocumentId {
        &self.group.document_id
    }

    pub fn name(&self) -> &str {
        &self.group.name
    }

    pub fn options(&self) -> &[AddonOption] {
        &self.group.addon_options
    }

    /// Form field name shared by the group's inputs.
    pub fn input_name(&self) -> String {
        format!("addon-{}", self.group.document_id)
    }
}

/// Resolve a product's add-on configuration against the add-on catalog.
///
/// Groups are matched by `documentId` and returned in configuration order.
/// Configurations without a reference, or whose group is not in the
/// catalog, are skipped. When the catalog repeats a `documentId` the last
/// record wins.
pub fn resolve_addons(configs: &[AddonConfig], catalog: &[AddonGroup]) -> Vec<ResolvedAddon> {
    let by_document_id: HashMap<&DocumentId, &AddonGroup> = catalog
        .iter()
        .map(|group| (&group.document_id, group))
        .collect();

    configs
        .iter()
        .filter_map(|config| {
            let group = by_document_id.get(config.group_document_id()?)?;
            Some(ResolvedAddon {
                group: (*group).clone(),
                required: config.is_required(),
                selection_type: config.selection_type(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Vec<AddonGroup> {
        vec![
            AddonGroup::new(1, "a1", "Choose your sauce")
                .with_option(AddonOption::new(11, "Garlic", Some(50.0)))
                .with_option(AddonOption::new(12, "Chili", None)),
            AddonGroup::new(2, "a2", "Drinks"),
        ]
    }

    #[test]
    fn test_resolves_flags_from_config() {
        let configs = vec![AddonConfig::for_group("a1")
            .required(true)
            .selection(SelectionType::Multiple)];

        let resolved = resolve_addons(&configs, &catalog());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].document_id().as_str(), "a1");
        assert!(resolved[0].required);
        assert_eq!(resolved[0].selection_type, SelectionType::Multiple);
        assert_eq!(resolved[0].options().len(), 2);
    }

    #[test]
    fn test_defaults_when_flags_absent() {
        let resolved = resolve_addons(&[AddonConfig::for_group("a2")], &catalog());
        assert!(!resolved[0].required);
        assert_eq!(resolved[0].selection_type, SelectionType::Single);
        assert!(resolved[0].options().is_empty());
    }

    #[test]
    fn test_unknown_and_missing_references_are_skipped() {
        let configs = vec![
            AddonConfig::for_group("missing"),
            AddonConfig::default(),
            AddonConfig::for_group(""),
            AddonConfig::for_group("a2"),
        ];

        let resolved = resolve_addons(&configs, &catalog());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name(), "Drinks");
    }

    #[test]
    fn test_configuration_order_is_kept() {
        let configs = vec![AddonConfig::for_group("a2"), AddonConfig::for_group("a1")];
        let names: Vec<_> = resolve_addons(&configs, &catalog())
            .iter()
            .map(|a| a.name().to_string())
            .collect();
        assert_eq!(names, vec!["Drinks", "Choose your sauce"]);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let mut groups = catalog();
        groups.push(AddonGroup::new(3, "a1", "Sauces v2"));
        let resolved = resolve_addons(&[AddonConfig::for_group("a1")], &groups);
        assert_eq!(resolved[0].name(), "Sauces v2");
    }

    #[test]
    fn test_deserialize_catalog_record() {
        let group: AddonGroup = serde_json::from_value(json!({
            "id": 9,
            "documentId": "a9",
            "name": "Extras",
            "addonOptions": [{ "id": 91, "title": "Cheese", "price": null }]
        }))
        .unwrap();
        assert_eq!(group.addon_options[0].price, None);
        assert_eq!(group.addon_options[0].input_id(), "option-91");

        let bare: AddonGroup =
            serde_json::from_value(json!({ "id": 1, "documentId": "a1", "name": "X", "addonOptions": null })).unwrap();
        assert!(bare.addon_options.is_empty());
    }

    #[test]
    fn test_unknown_selection_type_is_single() {
        let config: AddonConfig = serde_json::from_value(json!({ "selectionType": "several" })).unwrap();
        assert_eq!(config.selection_type(), SelectionType::Single);
    }

    #[test]
    fn test_selection_type_wire_values() {
        let parse = |value| serde_json::from_value::<SelectionType>(value).unwrap();
        assert_eq!(parse(json!("single")), SelectionType::Single);
        assert_eq!(parse(json!("multiple")), SelectionType::Multiple);
        assert_eq!(parse(json!("MULTIPLE")), SelectionType::Single);
        assert_eq!(serde_json::to_value(SelectionType::Multiple).unwrap(), json!("multiple"));
        assert_eq!(serde_json::to_value(SelectionType::default()).unwrap(), json!("single"));
    }

    #[test]
    fn test_input_naming() {
        let resolved = resolve_addons(&[AddonConfig::for_group("a1")], &catalog());
        assert_eq!(resolved[0].input_name(), "addon-a1");
        assert_eq!(resolved[0].selection_type.input_type(), "radio");
        assert_eq!(SelectionType::Multiple.input_type(), "checkbox");
        assert_eq!(resolved[0].options()[0].price_label().as_deref(), Some("Rs. 50.00"));
        assert_eq!(resolved[0].options()[1].price_label(), None);
    }
}
