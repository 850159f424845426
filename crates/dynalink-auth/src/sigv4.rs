//! AWS Signature Version 4 signing.
//!
//! Signing flow:
//!
//! 1. Stamp the request with an `x-amz-date` timestamp.
//! 2. Build the canonical request over every outgoing header plus that
//!    timestamp.
//! 3. Build the string to sign from the timestamp, credential scope, and
//!    canonical request hash.
//! 4. Derive the signing key from the secret key and scope components.
//! 5. HMAC the string to sign and render the `Authorization` header.
//!
//! The main entry point is [`SigV4Signer`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hmac::{Hmac, KeyInit, Mac};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::canonical::CanonicalRequest;
use crate::error::SigningError;
use crate::signer::{RequestSignature, RequestSigner, SigningRequest};

/// The signing algorithm.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Header carrying the signing timestamp.
pub const AMZ_DATE_HEADER: &str = "x-amz-date";

type HmacSha256 = Hmac<Sha256>;

/// Signs requests locally with AWS Signature Version 4.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use chrono::{TimeZone, Utc};
/// use dynalink_auth::{SigV4Signer, SigningRequest};
///
/// let headers = BTreeMap::from([(
///     "host".to_owned(),
///     "dynamodb.us-east-1.amazonaws.com".to_owned(),
/// )]);
/// let request = SigningRequest {
///     access_key_id: "AKIDEXAMPLE",
///     body: "{}",
///     headers: &headers,
///     http_request_method: "POST",
///     query_string: "",
///     region: "us-east-1",
///     secret_access_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
///     service: "dynamodb",
/// };
/// let at = Utc.with_ymd_and_hms(2012, 2, 15, 0, 0, 0).unwrap();
/// let signature = SigV4Signer::new().sign_at(request, at).unwrap();
/// assert_eq!(signature.date, "20120215T000000Z");
/// assert!(signature.authorization.starts_with(
///     "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20120215/us-east-1/dynamodb/aws4_request"
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SigV4Signer;

impl SigV4Signer {
    /// Create a signer that stamps requests with the current time.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Sign `request` as if it were sent at `at`.
    pub fn sign_at(
        &self,
        request: SigningRequest<'_>,
        at: DateTime<Utc>,
    ) -> Result<RequestSignature, SigningError> {
        if request.access_key_id.is_empty() {
            return Err(SigningError::MissingCredential("access key id"));
        }
        if request.secret_access_key.is_empty() {
            return Err(SigningError::MissingCredential("secret access key"));
        }
        if !request.headers.contains_key("host") {
            return Err(SigningError::MissingHeader("host".to_owned()));
        }

        let timestamp = at.format("%Y%m%dT%H%M%SZ").to_string();
        let date = at.format("%Y%m%d").to_string();

        let headers = request
            .headers
            .iter()
            .filter(|(name, _)| !name.eq_ignore_ascii_case(AMZ_DATE_HEADER))
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .chain(std::iter::once((AMZ_DATE_HEADER, timestamp.as_str())));

        let canonical = CanonicalRequest::new(
            request.http_request_method,
            "/",
            request.query_string,
            headers,
            hash_payload(request.body.as_bytes()),
        );

        let credential_scope = format!(
            "{date}/{}/{}/aws4_request",
            request.region, request.service
        );
        let string_to_sign = build_string_to_sign(&timestamp, &credential_scope, &canonical.hash());

        debug!(
            access_key_id = %request.access_key_id,
            %credential_scope,
            signed_headers = %canonical.signed_headers(),
            "Signing request"
        );

        let signing_key = derive_signing_key(
            request.secret_access_key,
            &date,
            request.region,
            request.service,
        );
        let signature = compute_signature(&signing_key, &string_to_sign);

        Ok(RequestSignature {
            authorization: format!(
                "{ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={}, Signature={signature}",
                request.access_key_id,
                canonical.signed_headers(),
            ),
            date: timestamp,
        })
    }
}

#[async_trait]
impl RequestSigner for SigV4Signer {
    async fn sign(&self, request: SigningRequest<'_>) -> Result<RequestSignature, SigningError> {
        self.sign_at(request, Utc::now())
    }
}

/// Build the SigV4 string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256\n
/// <ISO8601 timestamp>\n
/// <credential_scope>\n
/// <hex(SHA256(canonical_request))>
/// ```
#[must_use]
pub fn build_string_to_sign(
    timestamp: &str,
    credential_scope: &str,
    canonical_request_hash: &str,
) -> String {
    format!("{ALGORITHM}\n{timestamp}\n{credential_scope}\n{canonical_request_hash}")
}

/// Derive the SigV4 signing key using HMAC-SHA256 chain.
///
/// ```text
/// DateKey              = HMAC-SHA256("AWS4" + secret_key, date)
/// DateRegionKey        = HMAC-SHA256(DateKey, region)
/// DateRegionServiceKey = HMAC-SHA256(DateRegionKey, service)
/// SigningKey           = HMAC-SHA256(DateRegionServiceKey, "aws4_request")
/// ```
#[must_use]
pub fn derive_signing_key(secret_key: &str, date: &str, region: &str, service: &str) -> Vec<u8> {
    [region, service, "aws4_request"].iter().fold(
        hmac_sha256(format!("AWS4{secret_key}").as_bytes(), date.as_bytes()),
        |key, part| hmac_sha256(&key, part.as_bytes()),
    )
}

/// HMAC `data` with `signing_key` and hex-encode the result.
#[must_use]
pub fn compute_signature(signing_key: &[u8], data: &str) -> String {
    hex::encode(hmac_sha256(signing_key, data.as_bytes()))
}

/// Hex-encoded SHA-256 of a request body.
#[must_use]
pub fn hash_payload(payload: &[u8]) -> String {
    hex::encode(Sha256::digest(payload))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can accept keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}
