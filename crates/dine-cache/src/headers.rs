//! Cache response headers.

use crate::policy::RouteCachePolicy;

/// Header names used by the storefront.
pub mod header_names {
    pub const CACHE_CONTROL: &str = "Cache-Control";
    pub const VARY: &str = "Vary";
    pub const ETAG: &str = "ETag";
    /// Cache tags for invalidation.
    pub const X_CACHE_TAGS: &str = "X-Cache-Tags";
    /// Request ID for tracing.
    pub const X_REQUEST_ID: &str = "X-Request-ID";
}

/// Builder for cache response headers.
#[derive(Debug, Default)]
pub struct CacheHeadersBuilder {
    cache_control: Option<String>,
    vary: Option<String>,
    etag: Option<String>,
    tags: Vec<String>,
}

impl CacheHeadersBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set Cache-Control header.
    pub fn cache_control(mut self, value: impl Into<String>) -> Self {
        self.cache_control = Some(value.into());
        self
    }

    /// Set Cache-Control and cache tags from policy.
    pub fn cache_control_from_policy(mut self, policy: &RouteCachePolicy) -> Self {
        self.cache_control = Some(policy.cache_control_header());
        if policy.is_cacheable() {
            self.tags = policy.tags.clone();
        }
        self
    }

    /// Set Vary from policy.
    pub fn vary_from_policy(mut self, policy: &RouteCachePolicy) -> Self {
        self.vary = policy.vary_header();
        self
    }

    /// Set ETag header.
    pub fn etag(mut self, value: impl Into<String>) -> Self {
        self.etag = Some(value.into());
        self
    }

    /// Build the headers.
    pub fn build(self) -> Vec<(String, String)> {
        let mut headers = Vec::new();

        if let Some(cc) = self.cache_control {
            headers.push((header_names::CACHE_CONTROL.to_string(), cc));
        }

        if let Some(vary) = self.vary {
            headers.push((header_names::VARY.to_string(), vary));
        }

        if let Some(etag) = self.etag {
            headers.push((header_names::ETAG.to_string(), format!("\"{}\"", etag)));
        }

        if !self.tags.is_empty() {
            headers.push((header_names::X_CACHE_TAGS.to_string(), self.tags.join(", ")));
        }

        headers
    }
}

/// Generate a simple ETag from content.
pub fn generate_etag(content: &str) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("{:x}", hasher.finish())
}
