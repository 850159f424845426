//! Error types for request signing.

/// Errors a [`crate::RequestSigner`] can report.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// A credential component needed for the signature is empty.
    #[error("Missing credential component: {0}")]
    MissingCredential(&'static str),

    /// A header that must take part in the signature is absent.
    #[error("Missing required header: {0}")]
    MissingHeader(String),

    /// The signer refused or failed to produce a signature.
    #[error("Signing failed: {0}")]
    Failed(String),
}
