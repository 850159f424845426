//! Caller-facing shared types.
//!
//! These mirror the plain, lower-camel parameter bags callers hand to the
//! client. Attribute values are untyped JSON; they are tagged by
//! [`crate::codec`] on the way out.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec;
use crate::request::{DeletePayload, PutPayload, WireKey, WriteRequest};

/// Conditional-write expectations: attribute name to condition object
/// (`{"Value": ..., "Exists": ...}`).
pub type ExpectedConditions = BTreeMap<String, Map<String, Value>>;

/// Access key, secret and region supplied with every call.
///
/// All fields are optional so that a missing one can be reported by name.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Credentials {
    /// Access key id. `awsAccessKeyId` is accepted as an alias.
    #[serde(alias = "awsAccessKeyId", skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,

    /// Region the table lives in, e.g. `us-east-1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Secret access key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
}

impl Credentials {
    /// Create a complete set of credentials.
    #[must_use]
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: Some(access_key_id.into()),
            region: Some(region.into()),
            secret_access_key: Some(secret_access_key.into()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("region", &self.region)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "..."),
            )
            .finish()
    }
}

/// Primary key of an item: a hash key element plus an optional range key
/// element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemKey {
    /// Hash key element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_key_element: Option<Value>,

    /// Range key element, for tables with a composite key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_key_element: Option<Value>,
}

impl ItemKey {
    /// A key with only a hash element.
    #[must_use]
    pub fn hash(hash_key_element: impl Into<Value>) -> Self {
        Self {
            hash_key_element: Some(hash_key_element.into()),
            range_key_element: None,
        }
    }

    /// A key with both a hash and a range element.
    #[must_use]
    pub fn composite(hash_key_element: impl Into<Value>, range_key_element: impl Into<Value>) -> Self {
        Self {
            hash_key_element: Some(hash_key_element.into()),
            range_key_element: Some(range_key_element.into()),
        }
    }

    /// Encode both elements into the wire key shape.
    #[must_use]
    pub fn into_wire(self) -> WireKey {
        WireKey {
            hash_key_element: self.hash_key_element.map(codec::encode),
            range_key_element: self.range_key_element.map(codec::encode),
        }
    }

    /// Decode a wire key back into caller shape.
    #[must_use]
    pub fn from_wire(key: WireKey) -> Self {
        Self {
            hash_key_element: key.hash_key_element.map(codec::decode),
            range_key_element: key.range_key_element.map(codec::decode),
        }
    }
}

/// One entry of a batch write, in caller shape:
/// `{"putRequest": {"item": ...}}` or `{"deleteRequest": {"key": ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchWriteEntry {
    /// Store `item`.
    #[serde(rename_all = "camelCase")]
    PutRequest {
        /// The item to store.
        item: Map<String, Value>,
    },
    /// Remove the item identified by `key`.
    #[serde(rename_all = "camelCase")]
    DeleteRequest {
        /// Key of the item to remove.
        key: ItemKey,
    },
}

impl BatchWriteEntry {
    /// Encode this entry into its wire form.
    #[must_use]
    pub fn into_wire(self) -> WriteRequest {
        match self {
            Self::PutRequest { item } => WriteRequest::PutRequest(PutPayload {
                item: codec::encode_map(item),
            }),
            Self::DeleteRequest { key } => WriteRequest::DeleteRequest(DeletePayload {
                key: key.into_wire(),
            }),
        }
    }

    /// Decode a wire entry (as echoed back in `UnprocessedItems`).
    #[must_use]
    pub fn from_wire(request: WriteRequest) -> Self {
        match request {
            WriteRequest::PutRequest(put) => Self::PutRequest {
                item: codec::decode_map(put.item),
            },
            WriteRequest::DeleteRequest(delete) => Self::DeleteRequest {
                key: ItemKey::from_wire(delete.key),
            },
        }
    }
}

/// Range key condition of a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeKeyCondition {
    /// Comparison operator, e.g. `EQ`, `BETWEEN`, `BEGINS_WITH`.
    pub comparison_operator: String,

    /// Operands of the comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_value_list: Option<Vec<Value>>,
}
