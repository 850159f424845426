//! DynamoDB (API version 2011-12-05) client core for dynalink.
//!
//! Calls flow through four pieces:
//!
//! - [`ops`] validates a parameter bag and builds the wire request.
//! - [`pipeline`] signs, attaches the signature, and transmits it.
//! - [`response`] decodes the reply, reshaping batch-write results.
//! - [`client::DynamoDBClient`] exposes one async method per operation,
//!   and [`callback::CallbackService`] wraps it in callback style.
// "DynamoDB" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]

pub mod callback;
pub mod client;
pub mod config;
pub mod error;
pub mod ops;
pub mod pipeline;
pub mod response;
mod validation;

#[cfg(test)]
mod testing;

pub use callback::{Callback, CallbackService};
pub use client::DynamoDBClient;
pub use config::DynamoDBClientConfig;
pub use error::{DynamoDBClientError, DynamoDBClientResult};
pub use ops::OperationRequest;
