//! Route paths.

/// Prefix of product detail paths.
pub const PRODUCT_PREFIX: &str = "/product/";

/// Extract the document id from a path like `/product/abc123`.
///
/// The query string, fragment and any trailing segments are ignored.
/// Returns `None` for other paths and for empty or malformed ids.
pub fn extract_document_id(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(PRODUCT_PREFIX)?;
    let id = rest
        .split(['?', '#'])
        .next()
        .and_then(|s| s.split('/').next())?;

    let well_formed = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    well_formed.then_some(id)
}
