//! Scripted transport for tests.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::response::Response;
use crate::transport::{HttpTransport, TransportRequest};

#[derive(Debug, Clone)]
enum Route {
    Respond { status: u16, body: Vec<u8> },
    Fail(String),
}

/// Transport that answers from a table of canned responses keyed by URL.
///
/// Unrouted URLs answer `404`. Every request is recorded.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: HashMap<String, Route>,
    requests: RefCell<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with a JSON body.
    pub fn with_json(mut self, url: impl Into<String>, status: u16, body: serde_json::Value) -> Self {
        self.routes.insert(
            url.into(),
            Route::Respond {
                status,
                body: body.to_string().into_bytes(),
            },
        );
        self
    }

    /// Answer `url` with a raw body.
    pub fn with_body(mut self, url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(
            url.into(),
            Route::Respond {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// Fail requests to `url` at the transport level.
    pub fn with_failure(mut self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.routes.insert(url.into(), Route::Fail(message.into()));
        self
    }

    /// Requests sent so far, in order.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Whether a request was sent to `url`.
    pub fn was_requested(&self, url: &str) -> bool {
        self.requests.borrow().iter().any(|r| r.url == url)
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<Response, FetchError> {
        let route = self.routes.get(&request.url).cloned();
        self.requests.borrow_mut().push(request);

        match route {
            Some(Route::Respond { status, body }) => Ok(Response::new(status, HashMap::new(), body)),
            Some(Route::Fail(message)) => Err(FetchError::Request(message)),
            None => Ok(Response::new(404, HashMap::new(), b"{\"data\":null}".to_vec())),
        }
    }
}
