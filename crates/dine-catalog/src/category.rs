//! Menu categories.

use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;
use crate::media::Media;
use crate::wire::null_as_default;

/// A menu category. Its id is the grouping key and the page anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Media>,
}

impl Category {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: Media) -> Self {
        self.image = Some(image);
        self
    }

    /// DOM id of the category's listing section.
    pub fn anchor_id(&self) -> String {
        anchor_for(self.id)
    }
}

/// DOM id of a category section, `category-<id>`.
pub fn anchor_for(id: CategoryId) -> String {
    format!("category-{}", id)
}
