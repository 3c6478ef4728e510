//! Caching infrastructure for the Dine storefront.
//!
//! This crate provides:
//! - `RouteCachePolicy` - Route-level cache configuration
//! - `CacheHeadersBuilder` - `Cache-Control` / `Vary` response headers
//! - `ResponseStore` - In-process store for revalidating upstream fetches
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use dine_cache::{CacheHeadersBuilder, RouteCachePolicy};
//!
//! let policy = RouteCachePolicy::public(Duration::from_secs(3600))
//!     .with_swr(Duration::from_secs(86_400))
//!     .vary_on("Accept-Encoding");
//!
//! let headers = CacheHeadersBuilder::new()
//!     .cache_control_from_policy(&policy)
//!     .vary_from_policy(&policy)
//!     .build();
//! assert_eq!(headers[0].1, "public, max-age=3600, stale-while-revalidate=86400");
//! ```

mod headers;
mod policy;
mod store;

pub use headers::*;
pub use policy::*;
pub use store::*;
