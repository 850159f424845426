//! DynamoDB model types for dynalink.
//!
//! This crate holds everything that is pure data: the bidirectional codec
//! between plain JSON values and the type-tagged attribute form, the
//! operation enum, the caller-facing parameter bags, and the `PascalCase`
//! wire request bodies the builders serialize.
// "DynamoDB" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

pub mod codec;
pub mod input;
pub mod operations;
pub mod request;
pub mod types;

pub use codec::{TypeTag, decode, encode};
pub use operations::{ActionType, DynamoDBOperation};
pub use types::{BatchWriteEntry, Credentials, ItemKey};
