//! Fetch policies.

use std::time::Duration;

use dine_cache::RouteCachePolicy;
use dine_core::StorefrontConfig;

/// How an outbound fetch interacts with caching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Reuse a response for up to `window`; the edge may serve stale content
    /// for `stale_while_revalidate` while it refetches.
    Revalidate {
        window: Duration,
        stale_while_revalidate: Duration,
    },
    /// Always fetch fresh, never store.
    NoStore,
}

impl FetchPolicy {
    /// Revalidating policy with the given windows.
    pub fn revalidate(window: Duration, stale_while_revalidate: Duration) -> Self {
        Self::Revalidate {
            window,
            stale_while_revalidate,
        }
    }

    /// Revalidating policy using the configured windows.
    pub fn revalidate_from(config: &StorefrontConfig) -> Self {
        Self::revalidate(config.revalidate_window(), config.stale_while_revalidate())
    }

    /// Window during which a stored response may be reused, if any.
    pub fn reuse_window(&self) -> Option<Duration> {
        match self {
            Self::Revalidate { window, .. } if !window.is_zero() => Some(*window),
            _ => None,
        }
    }

    /// `Cache-Control` value sent with the outbound request.
    pub fn request_cache_control(&self) -> String {
        match self {
            Self::Revalidate {
                window,
                stale_while_revalidate,
            } => RouteCachePolicy::public(*window)
                .with_swr(*stale_while_revalidate)
                .cache_control_header(),
            Self::NoStore => RouteCachePolicy::none().cache_control_header(),
        }
    }
}
