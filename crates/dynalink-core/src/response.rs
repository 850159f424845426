//! Response decoding.
//!
//! Top-level keys are re-cased to a lowercase initial and their values
//! decoded back to plain JSON. Batch writes get two extra passes:
//!
//! - `responses` keeps only each table's consumed capacity.
//! - `unprocessedItems` is rebuilt in the shape callers submit entries in.

use dynalink_model::codec::decode;
use dynalink_model::request::WriteRequest;
use dynalink_model::{ActionType, BatchWriteEntry};
use http::StatusCode;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{DynamoDBClientError, DynamoDBClientResult};

/// Decode a raw response body.
///
/// A status of 300 or above turns the decoded body into a
/// [`DynamoDBClientError::Service`] error.
pub fn decode_response(
    action_type: ActionType,
    status: StatusCode,
    body: &str,
) -> DynamoDBClientResult<Map<String, Value>> {
    let parsed: Value = serde_json::from_str(body).map_err(DynamoDBClientError::Parse)?;
    let Value::Object(raw) = parsed else {
        return Err(DynamoDBClientError::UnexpectedResponse(format!(
            "expected a JSON object, got {}",
            json_kind(&parsed)
        )));
    };

    let mut decoded = Map::with_capacity(raw.len());
    for (key, value) in raw {
        let key = lowercase_initial(&key);
        let value = match (action_type, key.as_str()) {
            (ActionType::Batch, "responses") => consumed_capacity_only(decode(value)),
            (ActionType::Batch, "unprocessedItems") => unprocessed_entries(value)?,
            _ => decode(value),
        };
        decoded.insert(key, value);
    }

    if status.as_u16() >= 300 {
        warn!(status = status.as_u16(), "Service returned an error");
        return Err(DynamoDBClientError::Service {
            status,
            body: decoded,
        });
    }

    Ok(decoded)
}

/// `ConsumedCapacityUnits` -> `consumedCapacityUnits`.
#[must_use]
pub fn lowercase_initial(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn consumed_capacity_only(responses: Value) -> Value {
    let Value::Object(tables) = responses else {
        return responses;
    };

    tables
        .into_iter()
        .map(|(table, metadata)| {
            let mut reshaped = Map::new();
            if let Some(units) = metadata.get("ConsumedCapacityUnits") {
                reshaped.insert("consumedCapacityUnits".to_owned(), units.clone());
            }
            (table, Value::Object(reshaped))
        })
        .collect::<Map<_, _>>()
        .into()
}

fn unprocessed_entries(raw: Value) -> DynamoDBClientResult<Value> {
    let Value::Object(tables) = raw else {
        return Ok(decode(raw));
    };

    let mut reshaped = Map::with_capacity(tables.len());
    for (table, entries) in tables {
        let Value::Array(entries) = entries else {
            warn!(%table, "Unprocessed items are not a list");
            reshaped.insert(table, Value::Array(Vec::new()));
            continue;
        };

        let mut restored = Vec::with_capacity(entries.len());
        for entry in entries {
            match serde_json::from_value::<WriteRequest>(entry) {
                Ok(request) => {
                    let entry = BatchWriteEntry::from_wire(request);
                    restored.push(
                        serde_json::to_value(entry).map_err(DynamoDBClientError::Serialization)?,
                    );
                }
                Err(e) => warn!(%table, error = %e, "Dropping unrecognized unprocessed entry"),
            }
        }
        reshaped.insert(table, Value::Array(restored));
    }

    Ok(Value::Object(reshaped))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
