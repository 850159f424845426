//! `GetItem` builder.

use dynalink_model::request::GetItemRequest;
use dynalink_model::{DynamoDBOperation, ItemKey, input::GetItemParams};

use super::{OperationRequest, ResolvedCredentials};
use crate::error::DynamoDBClientResult;
use crate::validation::{required, required_str, required_value};

/// Validate `params` and build the `GetItem` request.
pub fn build(params: GetItemParams) -> DynamoDBClientResult<OperationRequest> {
    let GetItemParams {
        credentials,
        table_name,
        key,
        attributes_to_get,
        consistent_read,
    } = params;

    let access_key_id = required_str(credentials.access_key_id, "accessKeyId")?;
    let key = required(key, "key")?;
    let hash_key_element = required_value(key.hash_key_element, "key.hashKeyElement")?;
    let region = required_str(credentials.region, "region")?;
    let secret_access_key = required_str(credentials.secret_access_key, "secretAccessKey")?;
    let table_name = required_str(table_name, "tableName")?;

    let key = ItemKey {
        hash_key_element: Some(hash_key_element),
        range_key_element: key.range_key_element,
    };
    let body = GetItemRequest {
        key: key.into_wire(),
        table_name,
        attributes_to_get,
        consistent_read,
    };

    OperationRequest::new(
        DynamoDBOperation::GetItem,
        ResolvedCredentials {
            access_key_id,
            region,
            secret_access_key,
        },
        &body.table_name,
        &body,
    )
}
