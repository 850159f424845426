//! Wire request bodies for the five operations.
//!
//! All structs use `PascalCase` JSON field naming to match the 2011-12-05
//! `awsJson1_0` protocol. Attribute values inside are already type-tagged.
//! Field declaration order is the serialized order. Optional fields are
//! omitted when `None`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Primary key as sent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireKey {
    /// Encoded hash key element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_key_element: Option<Value>,

    /// Encoded range key element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_key_element: Option<Value>,
}

// ---------------------------------------------------------------------------
// Item CRUD
// ---------------------------------------------------------------------------

/// Body of a `PutItem` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutItemRequest {
    /// Encoded item.
    pub item: Map<String, Value>,

    /// Target table.
    pub table_name: String,

    /// Conditions with encoded `Value` fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Map<String, Value>>,

    /// Which attributes to return (`NONE`, `ALL_OLD`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_values: Option<String>,
}

/// Body of a `GetItem` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetItemRequest {
    /// Encoded key of the item.
    pub key: WireKey,

    /// Source table.
    pub table_name: String,

    /// Attribute projection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_to_get: Option<Vec<String>>,

    /// Strongly consistent read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent_read: Option<bool>,
}

/// Body of a `DeleteItem` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteItemRequest {
    /// Encoded key of the item.
    pub key: WireKey,

    /// Target table.
    pub table_name: String,

    /// Conditions with encoded `Value` fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Map<String, Value>>,

    /// Which attributes to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_values: Option<String>,
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Range key condition as sent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireRangeKeyCondition {
    /// Comparison operator.
    pub comparison_operator: String,

    /// Encoded operands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_value_list: Option<Vec<Value>>,
}

/// Body of a `Query` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryRequest {
    /// Encoded hash key value.
    pub hash_key_value: Value,

    /// Source table.
    pub table_name: String,

    /// Attribute projection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_to_get: Option<Vec<String>>,

    /// Strongly consistent read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent_read: Option<bool>,

    /// Return only the number of matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<bool>,

    /// Pagination cursor from a previous `LastEvaluatedKey`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_start_key: Option<WireKey>,

    /// Maximum number of items to evaluate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Range key condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_key_condition: Option<WireRangeKeyCondition>,

    /// Ascending (`true`) or descending (`false`) range order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_index_forward: Option<bool>,
}

// ---------------------------------------------------------------------------
// Batch operations
// ---------------------------------------------------------------------------

/// `PutRequest` payload of a batch entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutPayload {
    /// Encoded item.
    pub item: Map<String, Value>,
}

/// `DeleteRequest` payload of a batch entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeletePayload {
    /// Encoded key.
    pub key: WireKey,
}

/// One wire entry of `RequestItems` / `UnprocessedItems`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WriteRequest {
    /// Put an item.
    PutRequest(PutPayload),
    /// Delete an item.
    DeleteRequest(DeletePayload),
}

/// Body of a `BatchWriteItem` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchWriteItemRequest {
    /// Table name to ordered list of entries.
    pub request_items: BTreeMap<String, Vec<WriteRequest>>,
}
