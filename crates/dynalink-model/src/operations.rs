//! DynamoDB operation enum.

use std::fmt;

/// Prefix of the `X-Amz-Target` header value for the 2011-12-05 API.
pub const TARGET_PREFIX: &str = "DynamoDB_20111205.";

/// The operations exposed by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamoDBOperation {
    // Item CRUD
    /// Put (insert or replace) an item.
    PutItem,
    /// Get an item by primary key.
    GetItem,
    /// Delete an item by primary key.
    DeleteItem,

    // Range reads
    /// Query items sharing a hash key.
    Query,

    // Batch operations
    /// Batch write (put/delete) items to multiple tables.
    BatchWriteItem,
}

/// How a response body must be reshaped after decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// Single-table item or query operation.
    Item,
    /// Multi-table batch operation with per-table metadata.
    Batch,
}

impl DynamoDBOperation {
    /// Every supported operation.
    pub const ALL: [Self; 5] = [
        Self::BatchWriteItem,
        Self::DeleteItem,
        Self::GetItem,
        Self::PutItem,
        Self::Query,
    ];

    /// Returns the AWS action name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PutItem => "PutItem",
            Self::GetItem => "GetItem",
            Self::DeleteItem => "DeleteItem",
            Self::Query => "Query",
            Self::BatchWriteItem => "BatchWriteItem",
        }
    }

    /// Returns the lower-camel method name callers register against.
    #[must_use]
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::PutItem => "putItem",
            Self::GetItem => "getItem",
            Self::DeleteItem => "deleteItem",
            Self::Query => "query",
            Self::BatchWriteItem => "batchWriteItem",
        }
    }

    /// Parse an AWS action name into a `DynamoDBOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    /// Parse a lower-camel method name into a `DynamoDBOperation`.
    #[must_use]
    pub fn from_method_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.method_name() == name)
    }

    /// Returns the full `X-Amz-Target` header value, e.g.
    /// `DynamoDB_20111205.PutItem`.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}{}", self.as_str())
    }

    /// Returns the response-shaping class of this operation.
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        match self {
            Self::BatchWriteItem => ActionType::Batch,
            _ => ActionType::Item,
        }
    }

    /// Returns `true` for operations that only read data.
    ///
    /// Read operations are skipped entirely when nobody is waiting on
    /// their result.
    #[must_use]
    pub fn is_read(&self) -> bool {
        matches!(self, Self::GetItem | Self::Query)
    }
}

impl fmt::Display for DynamoDBOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
