//! Required-parameter checks.
//!
//! Builders call these in a fixed order so the first missing field is the
//! one reported.

use serde_json::Value;

use crate::error::{DynamoDBClientError, DynamoDBClientResult};

/// A string that must be present and non-empty.
pub(crate) fn required_str(
    value: Option<String>,
    field: &'static str,
) -> DynamoDBClientResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(DynamoDBClientError::MissingParameter(field))
}

/// A value that must be present and not `null`.
pub(crate) fn required_value(
    value: Option<Value>,
    field: &'static str,
) -> DynamoDBClientResult<Value> {
    value
        .filter(|v| !v.is_null())
        .ok_or(DynamoDBClientError::MissingParameter(field))
}

/// Any other required parameter.
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> DynamoDBClientResult<T> {
    value.ok_or(DynamoDBClientError::MissingParameter(field))
}
