//! Page error types.

use dine_data::FetchError;

/// Error type for page loading.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// A content fetch failed; the page cannot be rendered.
    #[error("Content fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// No product with this document id.
    #[error("Product not found: {0}")]
    NotFound(String),
}

impl PageError {
    /// HTTP status the workload responds with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Fetch(_) => 500,
            Self::NotFound(_) => 404,
        }
    }
}
