//! Route-level cache policies.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Who may cache a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheScope {
    /// Shared caches (CDN, edge) and browsers.
    Public,
    /// Nobody.
    #[default]
    None,
}

/// Cache policy for a route's responses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouteCachePolicy {
    pub scope: CacheScope,
    /// Freshness lifetime (`max-age`).
    pub ttl: Duration,
    /// Window in which a stale response may be served while revalidating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_while_revalidate: Option<Duration>,
    /// Request headers the response varies on.
    pub vary: Vec<String>,
    /// Tags for purging cached responses.
    pub tags: Vec<String>,
}

impl RouteCachePolicy {
    /// Policy that forbids caching.
    pub fn none() -> Self {
        Self::default()
    }

    /// Shared-cacheable for `ttl`.
    pub fn public(ttl: Duration) -> Self {
        Self {
            scope: CacheScope::Public,
            ttl,
            ..Default::default()
        }
    }

    pub fn with_swr(mut self, duration: Duration) -> Self {
        self.stale_while_revalidate = Some(duration);
        self
    }

    /// Vary on a request header. Repeated names are ignored.
    pub fn vary_on(mut self, header: impl Into<String>) -> Self {
        let header = header.into();
        if !self.vary.iter().any(|h| h.eq_ignore_ascii_case(&header)) {
            self.vary.push(header);
        }
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Whether responses under this policy may be reused at all.
    pub fn is_cacheable(&self) -> bool {
        self.scope == CacheScope::Public && !self.ttl.is_zero()
    }

    /// `Cache-Control` value, e.g. `public, max-age=3600, stale-while-revalidate=86400`.
    pub fn cache_control_header(&self) -> String {
        if !self.is_cacheable() {
            return "no-store".to_string();
        }

        let mut directives = vec!["public".to_string(), format!("max-age={}", self.ttl.as_secs())];
        if let Some(swr) = self.stale_while_revalidate {
            directives.push(format!("stale-while-revalidate={}", swr.as_secs()));
        }
        directives.join(", ")
    }

    /// `Vary` value, if the policy varies on anything.
    pub fn vary_header(&self) -> Option<String> {
        if self.vary.is_empty() {
            None
        } else {
            Some(self.vary.join(", "))
        }
    }
}
