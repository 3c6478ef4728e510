//! Content API client.

use std::sync::Arc;

use dine_cache::ResponseStore;
use dine_core::RequestId;
use dine_observability::StructuredLogger;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::FetchError;
use crate::policy::FetchPolicy;
use crate::query::ContentQuery;
use crate::response::Response;
use crate::transport::{HttpTransport, SpinTransport, TransportRequest};

/// Response envelope. Every collection endpoint wraps its records in `data`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Vec<T>,
}

/// Client for collection endpoints of the content API.
///
/// Fetch failures are logged with the request URL and returned to the
/// caller; they are never swallowed into an empty result.
pub struct ContentClient<T: HttpTransport = SpinTransport> {
    base_url: String,
    transport: T,
    store: Option<Arc<ResponseStore>>,
    logger: StructuredLogger,
}

impl ContentClient<SpinTransport> {
    /// Client using Spin's outbound HTTP.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, SpinTransport)
    }
}

impl<T: HttpTransport> ContentClient<T> {
    /// Client using a custom transport.
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            store: None,
            logger: StructuredLogger::new(RequestId::generate()).with_workload("content-client"),
        }
    }

    /// Reuse revalidating responses from a shared store.
    pub fn with_store(mut self, store: Arc<ResponseStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Log through the request's logger.
    pub fn with_logger(mut self, logger: StructuredLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for a query.
    pub fn url_for(&self, query: &ContentQuery) -> String {
        format!("{}{}", self.base_url, query.to_path())
    }

    /// Fetch a collection and decode the records in its `data` envelope.
    pub async fn fetch_collection<D: DeserializeOwned>(
        &self,
        query: &ContentQuery,
        policy: &FetchPolicy,
    ) -> Result<Vec<D>, FetchError> {
        let url = self.url_for(query);

        let result = self.fetch_body(&url, policy).await.and_then(|body| {
            let envelope: Envelope<D> = serde_json::from_slice(&body)?;
            Ok(envelope.data)
        });

        match result {
            Ok(records) => {
                self.logger
                    .debug_builder("Collection fetched")
                    .field("collection", query.collection_name())
                    .field_i64("records", records.len() as i64)
                    .emit();
                Ok(records)
            }
            Err(err) => {
                let mut log = self
                    .logger
                    .error_builder("Content fetch failed")
                    .field("url", url.as_str())
                    .field("error", err.to_string());
                if let Some(status) = err.status() {
                    log = log.field_i64("status", i64::from(status));
                }
                log.emit();
                Err(err)
            }
        }
    }

    async fn fetch_body(&self, url: &str, policy: &FetchPolicy) -> Result<Vec<u8>, FetchError> {
        let reuse = self.store.as_ref().zip(policy.reuse_window());

        if let Some((store, window)) = reuse {
            let lookup = store.lookup(url, window);
            if let Some(body) = lookup.body {
                self.logger
                    .debug_builder("Serving stored response")
                    .field("url", url)
                    .field("cache", lookup.status.to_string())
                    .emit();
                return Ok(body);
            }
            self.logger
                .debug_builder("Refreshing stored response")
                .field("url", url)
                .field("cache", lookup.status.to_string())
                .emit();
        }

        let request = TransportRequest::get(url)
            .header("Accept", "application/json")
            .header("Cache-Control", policy.request_cache_control());

        let response: Response = self.transport.send(request).await?;
        let response = response.error_for_status(url)?;

        if let Some((store, _)) = reuse {
            store.put(url, response.body.clone());
        }

        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Populate;
    use crate::testing::MockTransport;
    use futures::executor::block_on;
    use serde_json::json;
    use std::time::Duration;

    const BASE: &str = "https://cms.example.com/api";

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: u64,
    }

    fn categories() -> ContentQuery {
        ContentQuery::collection("categories").populate(Populate::All)
    }

    fn revalidate() -> FetchPolicy {
        FetchPolicy::revalidate(Duration::from_secs(3600), Duration::from_secs(86_400))
    }

    #[test]
    fn test_fetch_collection_decodes_envelope() {
        let transport = MockTransport::new().with_json(
            "https://cms.example.com/api/categories?populate=*",
            200,
            json!({"data": [{"id": 1}, {"id": 2}], "meta": {}}),
        );
        let client = ContentClient::with_transport(BASE, transport);

        let rows: Vec<Row> = block_on(client.fetch_collection(&categories(), &revalidate())).unwrap();
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn test_request_headers_follow_policy() {
        let transport = MockTransport::new().with_json(
            "https://cms.example.com/api/categories?populate=*",
            200,
            json!({"data": []}),
        );
        let client = ContentClient::with_transport(BASE, transport);

        let _: Vec<Row> = block_on(client.fetch_collection(&categories(), &revalidate())).unwrap();
        let _: Vec<Row> = block_on(client.fetch_collection(&categories(), &FetchPolicy::NoStore)).unwrap();

        let requests = client.transport.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].headers.contains(&(
            "Cache-Control".to_string(),
            "public, max-age=3600, stale-while-revalidate=86400".to_string()
        )));
        assert!(requests[0]
            .headers
            .contains(&("Accept".to_string(), "application/json".to_string())));
        assert!(requests[1]
            .headers
            .contains(&("Cache-Control".to_string(), "no-store".to_string())));
    }

    #[test]
    fn test_http_error_is_returned() {
        let transport = MockTransport::new().with_json(
            "https://cms.example.com/api/categories?populate=*",
            503,
            json!({"error": "unavailable"}),
        );
        let client = ContentClient::with_transport(BASE, transport);

        let err = block_on(client.fetch_collection::<Row>(&categories(), &revalidate())).unwrap_err();
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_transport_failure_is_returned() {
        let transport = MockTransport::new()
            .with_failure("https://cms.example.com/api/categories?populate=*", "connection refused");
        let client = ContentClient::with_transport(BASE, transport);

        let err = block_on(client.fetch_collection::<Row>(&categories(), &revalidate())).unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }

    #[test]
    fn test_missing_envelope_is_deserialization_error() {
        let transport = MockTransport::new().with_json(
            "https://cms.example.com/api/categories?populate=*",
            200,
            json!([{"id": 1}]),
        );
        let client = ContentClient::with_transport(BASE, transport);

        let err = block_on(client.fetch_collection::<Row>(&categories(), &revalidate())).unwrap_err();
        assert!(matches!(err, FetchError::Deserialization(_)));
    }

    #[test]
    fn test_store_reuses_revalidating_responses_only() {
        let transport = MockTransport::new().with_json(
            "https://cms.example.com/api/categories?populate=*",
            200,
            json!({"data": [{"id": 7}]}),
        );
        let store = Arc::new(ResponseStore::new());
        let client = ContentClient::with_transport(BASE, transport).with_store(store.clone());

        let first: Vec<Row> = block_on(client.fetch_collection(&categories(), &revalidate())).unwrap();
        let second: Vec<Row> = block_on(client.fetch_collection(&categories(), &revalidate())).unwrap();
        assert_eq!(first, second);
        assert_eq!(client.transport.request_count(), 1);
        assert_eq!(store.len(), 1);

        let _: Vec<Row> = block_on(client.fetch_collection(&categories(), &FetchPolicy::NoStore)).unwrap();
        assert_eq!(client.transport.request_count(), 2);
    }

    #[test]
    fn test_failed_fetch_is_not_stored() {
        let transport = MockTransport::new().with_json(
            "https://cms.example.com/api/categories?populate=*",
            500,
            json!({}),
        );
        let store = Arc::new(ResponseStore::new());
        let client = ContentClient::with_transport(BASE, transport).with_store(store.clone());

        assert!(block_on(client.fetch_collection::<Row>(&categories(), &revalidate())).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ContentClient::with_transport("https://cms.example.com/api/", MockTransport::new());
        assert_eq!(client.url_for(&categories()), "https://cms.example.com/api/categories?populate=*");
    }
}
