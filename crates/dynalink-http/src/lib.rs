//! HTTP transport for dynalink.
//!
//! The request pipeline talks to the network only through [`HttpTransport`].
//! [`ReqwestTransport`] is the production implementation; tests substitute
//! in-memory fakes.

pub mod checksum;
pub mod client;
pub mod error;
pub mod transport;

pub use client::ReqwestTransport;
pub use error::TransportError;
pub use transport::{HttpRequest, HttpResponse, HttpTransport};
