//! `Query` builder.

use dynalink_model::DynamoDBOperation;
use dynalink_model::codec::encode;
use dynalink_model::input::QueryParams;
use dynalink_model::request::{QueryRequest, WireRangeKeyCondition};

use super::{OperationRequest, ResolvedCredentials};
use crate::error::DynamoDBClientResult;
use crate::validation::{required_str, required_value};

/// Validate `params` and build the `Query` request.
pub fn build(params: QueryParams) -> DynamoDBClientResult<OperationRequest> {
    let QueryParams {
        credentials,
        table_name,
        hash_key_value,
        attributes_to_get,
        consistent_read,
        count,
        exclusive_start_key,
        limit,
        range_key_condition,
        scan_index_forward,
    } = params;

    let access_key_id = required_str(credentials.access_key_id, "accessKeyId")?;
    let hash_key_value = required_value(hash_key_value, "hashKeyValue")?;
    let region = required_str(credentials.region, "region")?;
    let secret_access_key = required_str(credentials.secret_access_key, "secretAccessKey")?;
    let table_name = required_str(table_name, "tableName")?;

    let body = QueryRequest {
        hash_key_value: encode(hash_key_value),
        table_name,
        attributes_to_get,
        consistent_read,
        count,
        exclusive_start_key: exclusive_start_key.map(|key| key.into_wire()),
        limit,
        range_key_condition: range_key_condition.map(|condition| WireRangeKeyCondition {
            comparison_operator: condition.comparison_operator,
            attribute_value_list: condition
                .attribute_value_list
                .map(|values| values.into_iter().map(encode).collect()),
        }),
        scan_index_forward,
    };

    OperationRequest::new(
        DynamoDBOperation::Query,
        ResolvedCredentials {
            access_key_id,
            region,
            secret_access_key,
        },
        &body.table_name,
        &body,
    )
}
