//! `DeleteItem` builder.

use dynalink_model::codec::encode_expected;
use dynalink_model::request::DeleteItemRequest;
use dynalink_model::{DynamoDBOperation, ItemKey, input::DeleteItemParams};

use super::{OperationRequest, ResolvedCredentials};
use crate::error::DynamoDBClientResult;
use crate::validation::{required, required_str, required_value};

/// Validate `params` and build the `DeleteItem` request.
pub fn build(params: DeleteItemParams) -> DynamoDBClientResult<OperationRequest> {
    let DeleteItemParams {
        credentials,
        table_name,
        key,
        expected,
        return_values,
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
    let body = DeleteItemRequest {
        key: key.into_wire(),
        table_name,
        expected: expected.map(encode_expected),
        return_values,
    };

    OperationRequest::new(
        DynamoDBOperation::DeleteItem,
        ResolvedCredentials {
            access_key_id,
            region,
            secret_access_key,
        },
        &body.table_name,
        &body,
    )
}
