//! End-to-end tests for dynalink.
//!
//! Each test starts [`FakeDynamoDB`], a hyper server on `127.0.0.1:0` that
//! records every request and answers with canned responses, then drives
//! [`DynamoDBClient`] through the real `ReqwestTransport` and `SigV4Signer`.
//!
//! ```text
//! cargo test -p dynalink-integration
//! ```

use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Once};

use bytes::Bytes;
use chrono::NaiveDateTime;
use dynalink_auth::{SigV4Signer, SigningRequest};
use dynalink_core::{DynamoDBClient, DynamoDBClientConfig};
use dynalink_model::{Credentials, DynamoDBOperation};
use http::{HeaderMap, Request, Response, StatusCode};
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use parking_lot::Mutex;
use tokio::net::TcpListener;
use tracing::{debug, warn};

static INIT: Once = Once::new();

/// Access key id used by every test.
pub const ACCESS_KEY_ID: &str = "AKIDEXAMPLE";
/// Secret access key used by every test.
pub const SECRET_ACCESS_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";
/// Region used by every test.
pub const REGION: &str = "us-east-1";

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Credentials matching [`ACCESS_KEY_ID`], [`SECRET_ACCESS_KEY`] and [`REGION`].
#[must_use]
pub fn credentials() -> Credentials {
    Credentials::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY, REGION)
}

/// A request as the server received it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request method.
    pub method: http::Method,
    /// Request path.
    pub path: String,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body.
    pub body: String,
}

impl RecordedRequest {
    /// Value of a header, if present and ASCII.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Parsed request body.
    pub fn json(&self) -> anyhow::Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Recompute the signature from the received request and compare it
    /// with the `authorization` header.
    pub fn verify_signature(&self, secret_access_key: &str) -> anyhow::Result<bool> {
        let authorization = self
            .header("authorization")
            .ok_or_else(|| anyhow::anyhow!("missing authorization header"))?;
        let date = self
            .header("x-amz-date")
            .ok_or_else(|| anyhow::anyhow!("missing x-amz-date header"))?;
        let signed_headers = authorization
            .split(", ")
            .find_map(|part| part.strip_prefix("SignedHeaders="))
            .ok_or_else(|| anyhow::anyhow!("no SignedHeaders in {authorization}"))?;
        let access_key_id = authorization
            .split("Credential=")
            .nth(1)
            .and_then(|rest| rest.split('/').next())
            .ok_or_else(|| anyhow::anyhow!("no Credential in {authorization}"))?;

        let mut headers = BTreeMap::new();
        for name in signed_headers.split(';') {
            let value = self
                .header(name)
                .ok_or_else(|| anyhow::anyhow!("signed header {name} was not received"))?;
            headers.insert(name.to_owned(), value.to_owned());
        }

        let at = NaiveDateTime::parse_from_str(date, "%Y%m%dT%H%M%SZ")?.and_utc();
        let expected = SigV4Signer::new().sign_at(
            SigningRequest {
                access_key_id,
                body: &self.body,
                headers: &headers,
                http_request_method: self.method.as_str(),
                query_string: "",
                region: REGION,
                secret_access_key,
                service: "dynamodb",
            },
            at,
        )?;
        Ok(expected.authorization == authorization)
    }
}

#[derive(Debug, Clone)]
struct CannedResponse {
    status: StatusCode,
    body: String,
    corrupt_checksum: bool,
}

#[derive(Debug, Default)]
struct ServerState {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<HashMap<String, CannedResponse>>,
}

/// In-process stand-in for the DynamoDB endpoint.
#[derive(Debug, Clone)]
pub struct FakeDynamoDB {
    addr: SocketAddr,
    state: Arc<ServerState>,
}

impl FakeDynamoDB {
    /// Bind to an ephemeral port and start serving.
    pub async fn start() -> anyhow::Result<Self> {
        init_tracing();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(ServerState::default());

        let server_state = state.clone();
        tokio::spawn(async move {
            let http = HttpConnBuilder::new(TokioExecutor::new());
            loop {
                let (stream, peer_addr) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(e) => {
                        warn!(error = %e, "failed to accept connection");
                        continue;
                    }
                };

                let state = server_state.clone();
                let svc = service_fn(move |req| handle(state.clone(), req));
                let conn = http.serve_connection(TokioIo::new(stream), svc).into_owned();
                tokio::spawn(async move {
                    if let Err(e) = conn.await {
                        debug!(peer_addr = %peer_addr, error = %e, "connection closed");
                    }
                });
            }
        });

        Ok(Self { addr, state })
    }

    /// URL to point the transport at.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// A client wired to this server with default settings.
    #[must_use]
    pub fn client(&self) -> DynamoDBClient {
        self.client_with(DynamoDBClientConfig::default())
    }

    /// A client wired to this server, keeping the rest of `config`.
    #[must_use]
    pub fn client_with(&self, config: DynamoDBClientConfig) -> DynamoDBClient {
        DynamoDBClient::from_config(&DynamoDBClientConfig {
            endpoint_url: Some(self.endpoint_url()),
            ..config
        })
    }

    /// Answer `operation` with `status` and `body`, stamped with a valid
    /// `x-amz-crc32`.
    pub fn respond(&self, operation: DynamoDBOperation, status: StatusCode, body: &str) {
        self.insert_response(operation, status, body, false);
    }

    /// Answer `operation` with a body whose `x-amz-crc32` does not match.
    pub fn respond_with_bad_checksum(&self, operation: DynamoDBOperation, body: &str) {
        self.insert_response(operation, StatusCode::OK, body, true);
    }

    /// Every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    fn insert_response(
        &self,
        operation: DynamoDBOperation,
        status: StatusCode,
        body: &str,
        corrupt_checksum: bool,
    ) {
        self.state.responses.lock().insert(
            operation.target(),
            CannedResponse {
                status,
                body: body.to_owned(),
                corrupt_checksum,
            },
        );
    }
}

async fn handle(
    state: Arc<ServerState>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();
    let body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            warn!(error = %e, "failed to read request body");
            Bytes::new()
        }
    };

    let target = parts
        .headers
        .get("x-amz-target")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    state.requests.lock().push(RecordedRequest {
        method: parts.method,
        path: parts.uri.path().to_owned(),
        headers: parts.headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let canned = state
        .responses
        .lock()
        .get(&target)
        .cloned()
        .unwrap_or_else(|| CannedResponse {
            status: StatusCode::BAD_REQUEST,
            body: r#"{"__type":"com.amazon.coral.service#UnknownOperationException"}"#.to_owned(),
            corrupt_checksum: false,
        });

    let crc = crc32fast::hash(canned.body.as_bytes());
    let crc = if canned.corrupt_checksum {
        crc.wrapping_add(1)
    } else {
        crc
    };

    let response = Response::builder()
        .status(canned.status)
        .header("content-type", "application/x-amz-json-1.0")
        .header("x-amzn-requestid", format!("req-{}", state.requests.lock().len()))
        .header("x-amz-crc32", crc.to_string())
        .body(Full::new(Bytes::from(canned.body)))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())));
    Ok(response)
}

mod test_items;
mod test_query;
