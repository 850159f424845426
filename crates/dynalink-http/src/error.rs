//! Transport error types.

/// Errors raised while exchanging a request with the remote endpoint.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP client failed to send the request or read the response.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// An outgoing header name or value is not valid HTTP.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The response body does not match its `x-amz-crc32` checksum.
    #[error("CRC32 mismatch: expected {expected}, computed {computed}")]
    ChecksumMismatch {
        /// Checksum announced by the server.
        expected: u32,
        /// Checksum of the body actually received.
        computed: u32,
    },

    /// The `x-amz-crc32` header is present but not a decimal `u32`.
    #[error("Invalid x-amz-crc32 header: {0}")]
    InvalidChecksumHeader(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}
