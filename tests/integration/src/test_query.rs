//! Query through the real transport and signer.

#[cfg(test)]
mod tests {
    use dynalink_model::input::QueryParams;
    use dynalink_model::types::RangeKeyCondition;
    use dynalink_model::{DynamoDBOperation, ItemKey};
    use http::StatusCode;
    use serde_json::json;

    use crate::{FakeDynamoDB, SECRET_ACCESS_KEY, credentials};

    #[tokio::test]
    async fn test_should_page_through_query_results() {
        let server = FakeDynamoDB::start().await.unwrap();
        server.respond(
            DynamoDBOperation::Query,
            StatusCode::OK,
            r#"{"Count":2,"Items":[{"device":{"S":"d1"},"ts":{"N":1}},{"device":{"S":"d1"},"ts":{"N":2}}],"LastEvaluatedKey":{"HashKeyElement":{"S":"d1"},"RangeKeyElement":{"N":2}},"ConsumedCapacityUnits":1.0}"#,
        );

        let client = server.client();
        let first = client
            .query(QueryParams {
                credentials: credentials(),
                table_name: Some("events".to_owned()),
                hash_key_value: Some(json!("d1")),
                limit: Some(2),
                range_key_condition: Some(RangeKeyCondition {
                    comparison_operator: "GT".to_owned(),
                    attribute_value_list: Some(vec![json!(0)]),
                }),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(first["count"], json!(2));
        assert_eq!(
            first["items"],
            json!([{"device": "d1", "ts": 1}, {"device": "d1", "ts": 2}])
        );
        let last = &first["lastEvaluatedKey"];

        client
            .query(QueryParams {
                credentials: credentials(),
                table_name: Some("events".to_owned()),
                hash_key_value: Some(json!("d1")),
                exclusive_start_key: Some(ItemKey::composite(
                    last["HashKeyElement"].clone(),
                    last["RangeKeyElement"].clone(),
                )),
                scan_index_forward: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();

        let requests = server.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(
            requests[0].json().unwrap(),
            json!({
                "HashKeyValue": {"S": "d1"},
                "TableName": "events",
                "Limit": 2,
                "RangeKeyCondition": {
                    "ComparisonOperator": "GT",
                    "AttributeValueList": [{"N": 0}]
                }
            })
        );
        let second = requests[1].json().unwrap();
        assert_eq!(
            second["ExclusiveStartKey"],
            json!({"HashKeyElement": {"S": "d1"}, "RangeKeyElement": {"N": 2}})
        );
        assert_eq!(second["ScanIndexForward"], json!(false));
        assert!(requests.iter().all(|r| r.verify_signature(SECRET_ACCESS_KEY).unwrap()));
    }
}
