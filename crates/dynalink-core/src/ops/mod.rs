//! Operation builders.
//!
//! Each builder validates a parameter bag, encodes it into the wire body and
//! declares the headers of its request. The result is an [`OperationRequest`]
//! ready for the pipeline. No builder performs I/O.

pub mod batch_write_item;
pub mod delete_item;
pub mod get_item;
pub mod put_item;
pub mod query;

use std::collections::BTreeMap;
use std::fmt;

use dynalink_model::{ActionType, DynamoDBOperation};
use serde::Serialize;
use tracing::debug;

use crate::error::{DynamoDBClientError, DynamoDBClientResult};

/// Content type of every request body.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.0";

/// Service name used in the signing scope.
pub const SERVICE: &str = "dynamodb";

/// Request path of every operation.
pub const REQUEST_PATH: &str = "/";

/// Regional endpoint host.
#[must_use]
pub fn endpoint_host(region: &str) -> String {
    format!("dynamodb.{region}.amazonaws.com")
}

/// Headers every operation sends before signing.
#[must_use]
pub fn request_headers(
    operation: DynamoDBOperation,
    region: &str,
    body: &str,
) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("content-length".to_owned(), body.len().to_string()),
        ("content-type".to_owned(), CONTENT_TYPE.to_owned()),
        ("host".to_owned(), endpoint_host(region)),
        ("x-amz-target".to_owned(), operation.target()),
    ])
}

/// Validated credentials of one call.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedCredentials {
    /// Access key id.
    pub access_key_id: String,
    /// Endpoint region.
    pub region: String,
    /// Secret access key.
    pub secret_access_key: String,
}

impl fmt::Debug for ResolvedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("region", &self.region)
            .field("secret_access_key", &"...")
            .finish()
    }
}

/// A validated, serialized operation waiting to be signed and sent.
#[derive(Debug, Clone)]
pub struct OperationRequest {
    /// The operation.
    pub operation: DynamoDBOperation,
    /// Who is calling, and where.
    pub credentials: ResolvedCredentials,
    /// Serialized wire body.
    pub body: String,
    /// Query string; empty for every operation.
    pub query_string: String,
    /// Outgoing headers, lowercase names.
    pub headers: BTreeMap<String, String>,
}

impl OperationRequest {
    /// Serialize `body` and derive the operation headers. `table` is only logged.
    pub fn new(
        operation: DynamoDBOperation,
        credentials: ResolvedCredentials,
        table: &str,
        body: &impl Serialize,
    ) -> DynamoDBClientResult<Self> {
        let body = serde_json::to_string(body).map_err(DynamoDBClientError::Serialization)?;
        let headers = request_headers(operation, &credentials.region, &body);

        debug!(
            %operation,
            region = %credentials.region,
            table = %table,
            body_len = body.len(),
            "Built request"
        );

        Ok(Self {
            operation,
            credentials,
            body,
            query_string: String::new(),
            headers,
        })
    }

    /// Selects batch-specific response decoding.
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        self.operation.action_type()
    }

    /// Destination host.
    #[must_use]
    pub fn host(&self) -> String {
        endpoint_host(&self.credentials.region)
    }
}

#[cfg(test)]
pub(crate) fn test_credentials() -> dynalink_model::Credentials {
    dynalink_model::Credentials::new("AKID", "SECRET", "us-east-1")
}
