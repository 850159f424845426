//! Caller parameter bags for the five operations.
//!
//! Every field is optional at the type level so that the builders can name
//! the first missing required one. Credentials are flattened in, so a bag is
//! a single flat lower-camel JSON object.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{BatchWriteEntry, Credentials, ExpectedConditions, ItemKey, RangeKeyCondition};

/// Parameters of `putItem`.
///
/// Required: credentials, `tableName`, `item`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PutItemParams {
    /// Access key, secret and region.
    #[serde(flatten)]
    pub credentials: Credentials,

    /// Target table.
    pub table_name: Option<String>,

    /// Item attributes as plain values.
    pub item: Option<Map<String, Value>>,

    /// Conditional-write expectations.
    pub expected: Option<ExpectedConditions>,

    /// Which attributes to return.
    pub return_values: Option<String>,
}

/// Parameters of `getItem`.
///
/// Required: credentials, `tableName`, `key.hashKeyElement`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetItemParams {
    /// Access key, secret and region.
    #[serde(flatten)]
    pub credentials: Credentials,

    /// Source table.
    pub table_name: Option<String>,

    /// Key of the item to read.
    pub key: Option<ItemKey>,

    /// Attribute projection.
    pub attributes_to_get: Option<Vec<String>>,

    /// Strongly consistent read.
    pub consistent_read: Option<bool>,
}

/// Parameters of `deleteItem`.
///
/// Required: credentials, `tableName`, `key.hashKeyElement`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteItemParams {
    /// Access key, secret and region.
    #[serde(flatten)]
    pub credentials: Credentials,

    /// Target table.
    pub table_name: Option<String>,

    /// Key of the item to delete.
    pub key: Option<ItemKey>,

    /// Conditional-write expectations.
    pub expected: Option<ExpectedConditions>,

    /// Which attributes to return.
    pub return_values: Option<String>,
}

/// Parameters of `batchWriteItem`.
///
/// Required: credentials, `requestItems`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchWriteItemParams {
    /// Access key, secret and region.
    #[serde(flatten)]
    pub credentials: Credentials,

    /// Table name to ordered list of put/delete entries.
    pub request_items: Option<BTreeMap<String, Vec<BatchWriteEntry>>>,
}

/// Parameters of `query`.
///
/// Required: credentials, `tableName`, `hashKeyValue`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    /// Access key, secret and region.
    #[serde(flatten)]
    pub credentials: Credentials,

    /// Source table.
    pub table_name: Option<String>,

    /// Hash key shared by the returned items.
    pub hash_key_value: Option<Value>,

    /// Attribute projection.
    pub attributes_to_get: Option<Vec<String>>,

    /// Strongly consistent read.
    pub consistent_read: Option<bool>,

    /// Return only the number of matches.
    pub count: Option<bool>,

    /// Resume after this key (a previous `lastEvaluatedKey`).
    pub exclusive_start_key: Option<ItemKey>,

    /// Maximum number of items to evaluate.
    pub limit: Option<u32>,

    /// Range key condition.
    pub range_key_condition: Option<RangeKeyCondition>,

    /// Ascending (`true`) or descending (`false`) range order.
    pub scan_index_forward: Option<bool>,
}
