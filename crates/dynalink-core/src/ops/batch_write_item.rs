//! `BatchWriteItem` builder.

use dynalink_model::DynamoDBOperation;
use dynalink_model::input::BatchWriteItemParams;
use dynalink_model::request::BatchWriteItemRequest;
use tracing::debug;

use super::{OperationRequest, ResolvedCredentials};
use crate::error::DynamoDBClientResult;
use crate::validation::{required, required_str};

/// Validate `params` and build the `BatchWriteItem` request.
///
/// The serialized body is always logged at debug level.
pub fn build(params: BatchWriteItemParams) -> DynamoDBClientResult<OperationRequest> {
    let BatchWriteItemParams {
        credentials,
        request_items,
    } = params;

    let access_key_id = required_str(credentials.access_key_id, "accessKeyId")?;
    let region = required_str(credentials.region, "region")?;
    let request_items = required(request_items, "requestItems")?;
    let secret_access_key = required_str(credentials.secret_access_key, "secretAccessKey")?;

    let body = BatchWriteItemRequest {
        request_items: request_items
            .into_iter()
            .map(|(table, entries)| {
                let entries = entries.into_iter().map(|entry| entry.into_wire()).collect();
                (table, entries)
            })
            .collect(),
    };

    let tables = body
        .request_items
        .keys()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",");
    let request = OperationRequest::new(
        DynamoDBOperation::BatchWriteItem,
        ResolvedCredentials {
            access_key_id,
            region,
            secret_access_key,
        },
        &tables,
        &body,
    )?;
    debug!(body = %request.body, "Batch write body");
    Ok(request)
}
