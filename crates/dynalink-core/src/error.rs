//! Client error taxonomy.

use dynalink_auth::SigningError;
use dynalink_http::TransportError;
use http::StatusCode;
use serde_json::{Map, Value};

/// Everything that can end an operation call early.
#[derive(Debug, thiserror::Error)]
pub enum DynamoDBClientError {
    /// A required parameter is absent. Raised before any I/O.
    #[error("missing {0}")]
    MissingParameter(&'static str),

    /// A JSON parameter bag does not fit the operation's parameter type.
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[source] serde_json::Error),

    /// A name handed to the callback boundary is not a known operation.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The request body could not be serialized.
    #[error("failed to serialize request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The signer failed.
    #[error(transparent)]
    Signing(#[from] SigningError),

    /// The HTTP exchange failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body is not JSON.
    #[error("failed to parse response: {0}")]
    Parse(#[source] serde_json::Error),

    /// The response body is JSON but not an object.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The service answered with a status of 300 or above. `body` is the
    /// decoded response.
    #[error("service error ({status}): {}", service_message(.body))]
    Service {
        /// Response status.
        status: StatusCode,
        /// Decoded response body.
        body: Map<String, Value>,
    },
}

impl DynamoDBClientError {
    /// The decoded service error body, if this is a service error.
    #[must_use]
    pub fn service_body(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Service { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Convenience result type for client operations.
pub type DynamoDBClientResult<T> = Result<T, DynamoDBClientError>;

fn service_message(body: &Map<String, Value>) -> String {
    let message = body.get("message").and_then(Value::as_str);
    let kind = body
        .get("__type")
        .and_then(Value::as_str)
        .map(|t| t.rsplit('#').next().unwrap_or(t));
    match (kind, message) {
        (Some(kind), Some(message)) => format!("{kind}: {message}"),
        (Some(kind), None) => kind.to_owned(),
        (None, Some(message)) => message.to_owned(),
        (None, None) => "no error message".to_owned(),
    }
}
