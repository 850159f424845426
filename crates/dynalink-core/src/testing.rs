//! In-memory collaborators for unit tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use dynalink_auth::{RequestSignature, RequestSigner, SigningError, SigningRequest};
use dynalink_http::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use http::{HeaderMap, StatusCode};
use parking_lot::Mutex;
use tokio::sync::Notify;

/// Owned copy of what a signer was asked to sign.
#[derive(Debug, Clone)]
pub(crate) struct SignedRequest {
    pub access_key_id: String,
    pub body: String,
    pub headers: BTreeMap<String, String>,
    pub http_request_method: String,
    pub query_string: String,
    pub region: String,
    pub service: String,
}

/// Returns a fixed signature and records every request.
#[derive(Debug, Default)]
pub(crate) struct RecordingSigner {
    requests: Mutex<Vec<SignedRequest>>,
}

impl RecordingSigner {
    pub const AUTHORIZATION: &'static str = "AWS4-HMAC-SHA256 Credential=AKID/fake";
    pub const DATE: &'static str = "20120215T000000Z";

    pub fn requests(&self) -> Vec<SignedRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl RequestSigner for RecordingSigner {
    async fn sign(&self, request: SigningRequest<'_>) -> Result<RequestSignature, SigningError> {
        self.requests.lock().push(SignedRequest {
            access_key_id: request.access_key_id.to_owned(),
            body: request.body.to_owned(),
            headers: request.headers.clone(),
            http_request_method: request.http_request_method.to_owned(),
            query_string: request.query_string.to_owned(),
            region: request.region.to_owned(),
            service: request.service.to_owned(),
        });
        Ok(RequestSignature {
            authorization: Self::AUTHORIZATION.to_owned(),
            date: Self::DATE.to_owned(),
        })
    }
}

/// Always refuses to sign.
#[derive(Debug)]
pub(crate) struct FailingSigner;

#[async_trait]
impl RequestSigner for FailingSigner {
    async fn sign(&self, _request: SigningRequest<'_>) -> Result<RequestSignature, SigningError> {
        Err(SigningError::Failed("signer unavailable".to_owned()))
    }
}

#[derive(Debug, Clone)]
enum Reply {
    Respond(StatusCode, String),
    Fail(String),
}

/// Records every request and answers with a canned reply.
#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    reply: Reply,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    sent: Arc<Notify>,
}

impl FakeTransport {
    pub fn responding(status: StatusCode, body: &str) -> Self {
        Self::with_reply(Reply::Respond(status, body.to_owned()))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Reply::Fail(message.to_owned()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requests: Arc::default(),
            sent: Arc::new(Notify::new()),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    /// Resolves once a request has been sent.
    pub async fn wait_for_request(&self) {
        self.sent.notified().await;
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().push(request);
        self.sent.notify_one();
        match &self.reply {
            Reply::Respond(status, body) => Ok(HttpResponse {
                status: *status,
                headers: HeaderMap::new(),
                body: body.clone(),
            }),
            Reply::Fail(message) => Err(TransportError::Other(message.clone())),
        }
    }
}

/// Log lines written by a [`capture_logs`] subscriber.
#[derive(Debug, Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A debug-level subscriber writing plain text into the returned buffer.
pub(crate) fn capture_logs() -> (impl tracing::Subscriber + Send + Sync, CapturedLogs) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    (subscriber, logs)
}
