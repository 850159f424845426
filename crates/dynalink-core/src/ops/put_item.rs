//! `PutItem` builder.

use dynalink_model::DynamoDBOperation;
use dynalink_model::codec::{encode_expected, encode_map};
use dynalink_model::input::PutItemParams;
use dynalink_model::request::PutItemRequest;

use super::{OperationRequest, ResolvedCredentials};
use crate::error::DynamoDBClientResult;
use crate::validation::{required, required_str};

/// Validate `params` and build the `PutItem` request.
pub fn build(params: PutItemParams) -> DynamoDBClientResult<OperationRequest> {
    let PutItemParams {
        credentials,
        table_name,
        item,
        expected,
        return_values,
    } = params;

    let access_key_id = required_str(credentials.access_key_id, "accessKeyId")?;
    let item = required(item, "item")?;
    let region = required_str(credentials.region, "region")?;
    let secret_access_key = required_str(credentials.secret_access_key, "secretAccessKey")?;
    let table_name = required_str(table_name, "tableName")?;

    let body = PutItemRequest {
        item: encode_map(item),
        table_name,
        expected: expected.map(encode_expected),
        return_values,
    };

    OperationRequest::new(
        DynamoDBOperation::PutItem,
        ResolvedCredentials {
            access_key_id,
            region,
            secret_access_key,
        },
        &body.table_name,
        &body,
    )
}
