//! Uploaded media references.

use serde::{Deserialize, Serialize};

/// An uploaded image. `url` is usually relative to the media origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub id: u64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_text: Option<String>,
}

impl Media {
    pub fn new(id: u64, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            alternative_text: None,
        }
    }

    /// Alternative text, falling back to `fallback` when absent or blank.
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.alternative_text.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => fallback,
        }
    }
}
