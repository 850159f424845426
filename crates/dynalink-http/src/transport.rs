//! The HTTP collaborator contract.

use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};

use crate::error::TransportError;

/// A fully assembled outgoing request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Destination host, e.g. `dynamodb.us-east-1.amazonaws.com`.
    pub host: String,
    /// Request path.
    pub path: String,
    /// Outgoing headers, lowercase names.
    pub headers: BTreeMap<String, String>,
    /// Serialized request body.
    pub body: Bytes,
}

/// The response as seen by the pipeline: status, headers and the whole body
/// accumulated as text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: String,
}

impl HttpResponse {
    /// The `x-amzn-requestid` stamped by the service, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
    }
}

/// Header carrying the service-side request id.
pub const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// Sends requests and collects responses.
///
/// Connection management and TLS live behind this trait; the pipeline only
/// needs "send this, give me status and body back".
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform one HTTP exchange.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
