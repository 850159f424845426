//! The signing collaborator contract.
//!
//! The request pipeline never computes signatures itself. It hands a
//! [`SigningRequest`] describing the outgoing request to a [`RequestSigner`]
//! and attaches the returned [`RequestSignature`] to the request headers.

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;

use crate::error::SigningError;

/// Everything a signer needs to know about the outgoing request.
#[derive(Clone, Copy)]
pub struct SigningRequest<'a> {
    /// Access key id of the caller.
    pub access_key_id: &'a str,
    /// Serialized request body.
    pub body: &'a str,
    /// Outgoing headers, lowercase names.
    pub headers: &'a BTreeMap<String, String>,
    /// HTTP method, always `POST` for this client.
    pub http_request_method: &'a str,
    /// Raw query string, empty for every current operation.
    pub query_string: &'a str,
    /// Region of the endpoint.
    pub region: &'a str,
    /// Secret access key of the caller.
    pub secret_access_key: &'a str,
    /// Service name used in the credential scope, e.g. `dynamodb`.
    pub service: &'a str,
}

impl fmt::Debug for SigningRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningRequest")
            .field("access_key_id", &self.access_key_id)
            .field("body_len", &self.body.len())
            .field("headers", &self.headers)
            .field("http_request_method", &self.http_request_method)
            .field("query_string", &self.query_string)
            .field("region", &self.region)
            .field("secret_access_key", &"...")
            .field("service", &self.service)
            .finish()
    }
}

/// The values a signer hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSignature {
    /// Value of the `authorization` header.
    pub authorization: String,
    /// Value of the `x-amz-date` header (`YYYYMMDDTHHMMSSZ`).
    pub date: String,
}

/// Computes request signatures.
///
/// Implementations may sign locally (see [`crate::SigV4Signer`]) or delegate
/// to a remote signing service, hence the async interface.
#[async_trait]
pub trait RequestSigner: Send + Sync {
    /// Produce the authorization and date values for `request`.
    async fn sign(&self, request: SigningRequest<'_>) -> Result<RequestSignature, SigningError>;
}
