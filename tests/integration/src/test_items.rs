//! Single-item operations through the real transport and signer.

#[cfg(test)]
mod tests {
    use dynalink_model::input::{DeleteItemParams, GetItemParams, PutItemParams};
    use dynalink_model::{DynamoDBOperation, ItemKey};
    use http::StatusCode;
    use serde_json::json;

    use crate::{FakeDynamoDB, SECRET_ACCESS_KEY, credentials};

    #[tokio::test]
    async fn test_should_send_signed_put_item() {
        let server = FakeDynamoDB::start().await.unwrap();
        server.respond(
            DynamoDBOperation::PutItem,
            StatusCode::OK,
            r#"{"ConsumedCapacityUnits":1.0}"#,
        );

        let result = server
            .client()
            .put_item(PutItemParams {
                credentials: credentials(),
                table_name: Some("T".to_owned()),
                item: json!({"hash": "h", "range": "0.0.0"}).as_object().cloned(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(result["consumedCapacityUnits"], json!(1.0));

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.path, "/");
        assert_eq!(
            request.body,
            r#"{"Item":{"hash":{"S":"h"},"range":{"S":"0.0.0"}},"TableName":"T"}"#
        );
        assert_eq!(
            request.header("x-amz-target"),
            Some("DynamoDB_20111205.PutItem")
        );
        assert_eq!(
            request.header("content-type"),
            Some("application/x-amz-json-1.0")
        );
        assert_eq!(
            request.header("host"),
            Some("dynamodb.us-east-1.amazonaws.com")
        );
        assert_eq!(
            request.header("content-length"),
            Some(request.body.len().to_string().as_str())
        );
        assert!(request.verify_signature(SECRET_ACCESS_KEY).unwrap());
    }

    #[tokio::test]
    async fn test_should_get_item_and_decode_attributes() {
        let server = FakeDynamoDB::start().await.unwrap();
        server.respond(
            DynamoDBOperation::GetItem,
            StatusCode::OK,
            r#"{"Item":{"hash":{"S":"h"},"score":{"N":42},"tags":{"SS":["a","b"]},"ids":{"NN":[1,2]}},"ConsumedCapacityUnits":0.5}"#,
        );

        let result = server
            .client()
            .get_item(GetItemParams {
                credentials: credentials(),
                table_name: Some("T".to_owned()),
                key: Some(ItemKey::hash("h")),
                consistent_read: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(
            result["item"],
            json!({"hash": "h", "score": 42, "tags": ["a", "b"], "ids": [1, 2]})
        );
        assert_eq!(
            server.requests()[0].json().unwrap(),
            json!({
                "Key": {"HashKeyElement": {"S": "h"}},
                "TableName": "T",
                "ConsistentRead": true
            })
        );
    }

    #[tokio::test]
    async fn test_should_delete_item_with_expectation() {
        let server = FakeDynamoDB::start().await.unwrap();
        server.respond(
            DynamoDBOperation::DeleteItem,
            StatusCode::OK,
            r#"{"Attributes":{"hash":{"S":"h"},"version":{"N":3}},"ConsumedCapacityUnits":1.0}"#,
        );

        let mut expected = std::collections::BTreeMap::new();
        expected.insert(
            "version".to_owned(),
            json!({"Value": 3}).as_object().cloned().unwrap(),
        );
        let result = server
            .client()
            .delete_item(DeleteItemParams {
                credentials: credentials(),
                table_name: Some("T".to_owned()),
                key: Some(ItemKey::composite("h", 1)),
                expected: Some(expected),
                return_values: Some("ALL_OLD".to_owned()),
            })
            .await
            .unwrap();

        assert_eq!(result["attributes"], json!({"hash": "h", "version": 3}));
        let body = server.requests()[0].json().unwrap();
        assert_eq!(body["Expected"], json!({"version": {"Value": {"N": 3}}}));
        assert_eq!(
            body["Key"],
            json!({"HashKeyElement": {"S": "h"}, "RangeKeyElement": {"N": 1}})
        );
    }
}
