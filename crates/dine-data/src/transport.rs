//! Outbound HTTP transport.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::response::Response;

/// An outbound GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl TransportRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }
}

/// Sends requests to the content API.
///
/// Workloads run on a single-threaded executor, so futures need not be `Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<Response, FetchError>;
}

/// Transport backed by Spin's outbound HTTP.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinTransport;

#[async_trait(?Send)]
impl HttpTransport for SpinTransport {
    async fn send(&self, request: TransportRequest) -> Result<Response, FetchError> {
        if !(request.url.starts_with("http://") || request.url.starts_with("https://")) {
            return Err(FetchError::InvalidUrl(request.url));
        }

        let mut builder = spin_sdk::http::Request::get(request.url.as_str());
        for (key, value) in &request.headers {
            builder.header(key.as_str(), value.as_str());
        }
        let outgoing = builder.build();

        let resp: spin_sdk::http::Response = spin_sdk::http::send(outgoing)
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = resp.status();
        Ok(Response::new(*status, HashMap::new(), resp.body().to_vec()))
    }
}
