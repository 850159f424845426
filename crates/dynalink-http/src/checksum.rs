//! `x-amz-crc32` response checksum verification.
//!
//! DynamoDB stamps every JSON response with the CRC32 of its body, rendered
//! as a decimal `u32`.

use http::HeaderMap;

use crate::error::TransportError;

/// Header carrying the body checksum.
pub const CRC32_HEADER: &str = "x-amz-crc32";

/// Check `body` against the `x-amz-crc32` header.
///
/// A response without the header passes.
///
/// # Errors
///
/// Returns [`TransportError::InvalidChecksumHeader`] for an unparsable
/// header and [`TransportError::ChecksumMismatch`] when the body differs.
pub fn verify_crc32(headers: &HeaderMap, body: &[u8]) -> Result<(), TransportError> {
    let Some(value) = headers.get(CRC32_HEADER) else {
        return Ok(());
    };

    let raw = value
        .to_str()
        .map_err(|_| TransportError::InvalidChecksumHeader("non-ASCII value".to_owned()))?;
    let expected: u32 = raw
        .trim()
        .parse()
        .map_err(|_| TransportError::InvalidChecksumHeader(raw.to_owned()))?;

    let computed = crc32fast::hash(body);
    if computed == expected {
        Ok(())
    } else {
        Err(TransportError::ChecksumMismatch { expected, computed })
    }
}
