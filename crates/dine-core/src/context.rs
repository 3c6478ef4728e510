//! Request context.

use crate::lifecycle::TimingContext;

/// Unique request identifier for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-request context passed from the workload handler into page code.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// Request path, without the query string.
    pub path: String,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a new request context.
    ///
    /// An upstream `X-Request-ID` is reused when present.
    pub fn new(path: impl Into<String>, upstream_id: Option<&str>) -> Self {
        let request_id = match upstream_id.map(str::trim) {
            Some(id) if !id.is_empty() => RequestId::from_string(id),
            _ => RequestId::generate(),
        };
        let path: String = path.into();
        let path = match path.split_once('?') {
            Some((p, _)) => p.to_string(),
            None => path,
        };
        Self {
            request_id,
            path,
            timing: TimingContext::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = RequestId::generate();
        let b = RequestId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
    }

    #[test]
    fn test_context_reuses_upstream_id() {
        let ctx = RequestContext::new("/product/abc?x=1", Some("req-42"));
        assert_eq!(ctx.request_id.as_str(), "req-42");
        assert_eq!(ctx.path, "/product/abc");
    }

    #[test]
    fn test_context_ignores_blank_upstream_id() {
        let ctx = RequestContext::new("/", Some("  "));
        assert_ne!(ctx.request_id.as_str().trim(), "");
    }
}
