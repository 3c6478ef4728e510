//! Observability infrastructure for the Dine storefront workloads.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with request context
//! - `init_tracing` - Subscriber installation for workload entry points

mod logging;
mod subscriber;

pub use logging::*;
pub use subscriber::*;

// Re-export from dine-core for convenience
pub use dine_core::{LogFormat, RequestId};
