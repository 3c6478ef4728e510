//! Rendered page responses.

use dine_cache::{header_names, CacheHeadersBuilder, RouteCachePolicy};
use dine_core::{RequestId, StorefrontConfig};
use dine_ui::render_status_page;

/// Listing pages are shared-cacheable and revalidated in the background.
pub fn listing_cache_policy(config: &StorefrontConfig) -> RouteCachePolicy {
    RouteCachePolicy::public(config.revalidate_window())
        .with_swr(config.stale_while_revalidate())
        .vary_on("Accept-Encoding")
        .with_tag("listing")
}

/// Product pages are always rendered fresh.
pub fn product_cache_policy() -> RouteCachePolicy {
    RouteCachePolicy::none()
}

/// A complete HTML response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl PageResponse {
    /// HTML response with cache headers from `policy`.
    pub fn html(
        status: u16,
        body: String,
        policy: &RouteCachePolicy,
        request_id: &RequestId,
    ) -> Self {
        let mut headers = vec![
            ("Content-Type".to_string(), "text/html; charset=utf-8".to_string()),
            (header_names::X_REQUEST_ID.to_string(), request_id.to_string()),
        ];
        headers.extend(
            CacheHeadersBuilder::new()
                .cache_control_from_policy(policy)
                .vary_from_policy(policy)
                .build(),
        );

        Self {
            status,
            headers,
            body,
        }
    }

    /// 404 page.
    pub fn not_found(request_id: &RequestId) -> Self {
        Self::html(
            404,
            render_status_page("Not found", "Product not found"),
            &RouteCachePolicy::none(),
            request_id,
        )
    }

    /// Generic 500 page. Details stay in the logs.
    pub fn server_error(request_id: &RequestId) -> Self {
        Self::html(
            500,
            render_status_page(
                "Something went wrong",
                "We couldn't load the menu right now. Please try again shortly.",
            ),
            &RouteCachePolicy::none(),
            request_id,
        )
    }

    /// Header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
