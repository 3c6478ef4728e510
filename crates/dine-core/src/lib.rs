//! Core abstractions for the Dine storefront workloads.
//!
//! This crate provides the fundamental types shared by every workload:
//! - `StorefrontConfig` - Explicitly injected storefront configuration
//! - `RequestContext` - Per-request identity and path
//! - `TimingContext` - Request timing marks

mod config;
mod context;
mod lifecycle;

pub use config::*;
pub use context::*;
pub use lifecycle::*;
