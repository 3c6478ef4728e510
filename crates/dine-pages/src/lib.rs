//! Storefront pages.
//!
//! Each page is split into a loader (concurrent content fetches into a view
//! model) and a renderer (view model into a complete HTML document). The
//! `serve_*` functions tie both to a [`PageResponse`] for the workloads, and
//! [`component`] carries the Spin glue they share.

pub mod component;
mod error;
mod handler;
mod listing;
mod product;
mod response;
mod routes;

pub use error::PageError;
pub use handler::{serve_listing, serve_product};
pub use listing::{load_listing, render_listing, ListingView};
pub use product::{load_product, render_product, ProductDetail};
pub use response::{listing_cache_policy, product_cache_policy, PageResponse};
pub use routes::{extract_document_id, PRODUCT_PREFIX};
