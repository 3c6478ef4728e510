//! Content API access layer.
//!
//! This crate provides:
//! - `ContentClient` - Collection fetches with envelope decoding and logging
//! - `ContentQuery` - Filter and relation-expansion query builder
//! - `FetchPolicy` - Revalidating vs. no-store fetches
//! - `HttpTransport` - Outbound HTTP seam (`SpinTransport` in production)

mod client;
mod error;
mod policy;
mod query;
mod response;
mod transport;

pub mod testing;

pub use client::*;
pub use error::*;
pub use policy::*;
pub use query::*;
pub use response::*;
pub use transport::*;
