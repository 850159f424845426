//! AWS Signature Version 4 request signing for dynalink.
//!
//! The client pipeline depends only on the [`RequestSigner`] trait; this
//! crate defines that contract and ships [`SigV4Signer`], a local
//! implementation that signs every outgoing header plus `x-amz-date`.
//!
//! # Modules
//!
//! - [`canonical`] - Canonical request construction per the SigV4 specification
//! - [`error`] - Signing error types
//! - [`signer`] - The signer trait and its request/response shapes
//! - [`sigv4`] - Local SigV4 signing

pub mod canonical;
pub mod error;
pub mod signer;
pub mod sigv4;

pub use error::SigningError;
pub use signer::{RequestSignature, RequestSigner, SigningRequest};
pub use sigv4::{SigV4Signer, hash_payload};
