//! The request pipeline: sign, attach, transmit, decode.
//!
//! A [`RequestContext`] belongs to exactly one in-flight call. Each stage
//! takes it by exclusive reference, and the first failing stage ends the
//! call. Nothing is retried.

use bytes::Bytes;
use dynalink_auth::{RequestSignature, RequestSigner, SigningError, SigningRequest};
use dynalink_http::{HttpRequest, HttpTransport};
use http::{Method, StatusCode};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{DynamoDBClientError, DynamoDBClientResult};
use crate::ops::{OperationRequest, REQUEST_PATH, SERVICE};
use crate::response::decode_response;

/// Header carrying the signature.
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Header carrying the signing timestamp.
pub const DATE_HEADER: &str = "x-amz-date";

/// Per-call state threaded through the stages.
#[derive(Debug)]
pub struct RequestContext {
    /// The request being executed; headers grow as stages run.
    pub request: OperationRequest,
    /// Set by [`RequestContext::sign`].
    pub signature: Option<RequestSignature>,
    /// Set by [`RequestContext::transmit`].
    pub status: Option<StatusCode>,
    /// Set by [`RequestContext::transmit`].
    pub response_body: Option<String>,
}

impl RequestContext {
    /// Start a context for `request`.
    #[must_use]
    pub fn new(request: OperationRequest) -> Self {
        Self {
            request,
            signature: None,
            status: None,
            response_body: None,
        }
    }

    /// Stage 1: ask the signer for authorization and date values.
    pub async fn sign(&mut self, signer: &dyn RequestSigner) -> DynamoDBClientResult<()> {
        let request = &self.request;
        let signing_request = SigningRequest {
            access_key_id: &request.credentials.access_key_id,
            body: &request.body,
            headers: &request.headers,
            http_request_method: Method::POST.as_str(),
            query_string: &request.query_string,
            region: &request.credentials.region,
            secret_access_key: &request.credentials.secret_access_key,
            service: SERVICE,
        };

        let signature = signer.sign(signing_request).await?;
        debug!(operation = %request.operation, date = %signature.date, "Signed request");
        self.signature = Some(signature);
        Ok(())
    }

    /// Stage 2: copy the signature into the outgoing headers.
    pub fn attach_signature(&mut self) -> DynamoDBClientResult<()> {
        let signature = self
            .signature
            .as_ref()
            .ok_or_else(|| SigningError::Failed("request has not been signed".to_owned()))?;

        let headers = &mut self.request.headers;
        headers.insert(
            AUTHORIZATION_HEADER.to_owned(),
            signature.authorization.clone(),
        );
        headers.insert(DATE_HEADER.to_owned(), signature.date.clone());
        Ok(())
    }

    /// Stage 3: perform the HTTP exchange and keep status and body.
    pub async fn transmit(&mut self, transport: &dyn HttpTransport) -> DynamoDBClientResult<()> {
        let http_request = HttpRequest {
            method: Method::POST,
            host: self.request.host(),
            path: REQUEST_PATH.to_owned(),
            headers: self.request.headers.clone(),
            body: Bytes::from(self.request.body.clone()),
        };

        let response = transport.send(http_request).await?;
        debug!(
            operation = %self.request.operation,
            status = response.status.as_u16(),
            "Received response"
        );
        self.status = Some(response.status);
        self.response_body = Some(response.body);
        Ok(())
    }

    /// Stage 4: decode the response body.
    pub fn decode(&self) -> DynamoDBClientResult<Map<String, Value>> {
        let (Some(status), Some(body)) = (self.status, self.response_body.as_deref()) else {
            return Err(DynamoDBClientError::UnexpectedResponse(
                "no response received".to_owned(),
            ));
        };
        decode_response(self.request.action_type(), status, body)
    }
}

/// Run all four stages in order.
pub async fn execute(
    request: OperationRequest,
    signer: &dyn RequestSigner,
    transport: &dyn HttpTransport,
    log_bodies: bool,
) -> DynamoDBClientResult<Map<String, Value>> {
    if log_bodies {
        debug!(operation = %request.operation, body = %request.body, "Request body");
    }

    let mut context = RequestContext::new(request);
    context.sign(signer).await?;
    context.attach_signature()?;
    context.transmit(transport).await?;
    context.decode()
}
