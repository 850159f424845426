//! Callback-style boundary.
//!
//! Each method starts the operation and returns immediately; the outcome is
//! delivered to the callback. Validation failures reach the callback
//! synchronously, before the method returns. Everything after validation
//! runs on the runtime behind the service's [`Handle`].
//!
//! The write operations (`put_item`, `delete_item`, `batch_write_item`)
//! run even without a callback. The read operations (`get_item`, `query`)
//! do nothing at all without one.

use std::fmt;

use dynalink_model::DynamoDBOperation;
use dynalink_model::input::{
    BatchWriteItemParams, DeleteItemParams, GetItemParams, PutItemParams, QueryParams,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tokio::runtime::Handle;
use tracing::debug;

use crate::client::DynamoDBClient;
use crate::error::{DynamoDBClientError, DynamoDBClientResult};
use crate::ops::{OperationRequest, batch_write_item, delete_item, get_item, put_item, query};

/// Receives the outcome of one operation.
pub type Callback = Box<dyn FnOnce(DynamoDBClientResult<Map<String, Value>>) + Send + 'static>;

/// Exposes the client through fire-and-callback methods.
#[derive(Clone)]
pub struct CallbackService {
    client: DynamoDBClient,
    handle: Handle,
}

impl fmt::Debug for CallbackService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackService")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl CallbackService {
    /// Run calls of `client` on the runtime behind `handle`.
    #[must_use]
    pub fn new(client: DynamoDBClient, handle: Handle) -> Self {
        Self { client, handle }
    }

    /// Store an item.
    pub fn put_item(&self, params: PutItemParams, callback: Option<Callback>) {
        let Some(callback) = callback_for(DynamoDBOperation::PutItem, callback) else {
            return;
        };
        self.dispatch(put_item::build(params), callback);
    }

    /// Fetch an item. Without a callback this does nothing.
    pub fn get_item(&self, params: GetItemParams, callback: Option<Callback>) {
        let Some(callback) = callback_for(DynamoDBOperation::GetItem, callback) else {
            return;
        };
        self.dispatch(get_item::build(params), callback);
    }

    /// Remove an item.
    pub fn delete_item(&self, params: DeleteItemParams, callback: Option<Callback>) {
        let Some(callback) = callback_for(DynamoDBOperation::DeleteItem, callback) else {
            return;
        };
        self.dispatch(delete_item::build(params), callback);
    }

    /// Write a batch of entries.
    pub fn batch_write_item(&self, params: BatchWriteItemParams, callback: Option<Callback>) {
        let Some(callback) = callback_for(DynamoDBOperation::BatchWriteItem, callback) else {
            return;
        };
        self.dispatch(batch_write_item::build(params), callback);
    }

    /// Query a table. Without a callback this does nothing.
    pub fn query(&self, params: QueryParams, callback: Option<Callback>) {
        let Some(callback) = callback_for(DynamoDBOperation::Query, callback) else {
            return;
        };
        self.dispatch(query::build(params), callback);
    }

    /// Run `operation` with a JSON parameter bag.
    ///
    /// A bag that does not fit the operation's parameters is reported as
    /// [`DynamoDBClientError::InvalidParameters`].
    pub fn invoke(&self, operation: DynamoDBOperation, params: Value, callback: Option<Callback>) {
        if callback.is_none() && operation.is_read() {
            debug!(%operation, "Skipped read without callback");
            return;
        }
        match operation {
            DynamoDBOperation::PutItem => match parse(params) {
                Ok(params) => self.put_item(params, callback),
                Err(e) => reject(e, callback),
            },
            DynamoDBOperation::GetItem => match parse(params) {
                Ok(params) => self.get_item(params, callback),
                Err(e) => reject(e, callback),
            },
            DynamoDBOperation::DeleteItem => match parse(params) {
                Ok(params) => self.delete_item(params, callback),
                Err(e) => reject(e, callback),
            },
            DynamoDBOperation::BatchWriteItem => match parse(params) {
                Ok(params) => self.batch_write_item(params, callback),
                Err(e) => reject(e, callback),
            },
            DynamoDBOperation::Query => match parse(params) {
                Ok(params) => self.query(params, callback),
                Err(e) => reject(e, callback),
            },
        }
    }

    /// Run the operation registered as `method_name` (`putItem`, `query`, ...).
    pub fn invoke_by_name(&self, method_name: &str, params: Value, callback: Option<Callback>) {
        match DynamoDBOperation::from_method_name(method_name) {
            Some(operation) => self.invoke(operation, params, callback),
            None => reject(
                DynamoDBClientError::UnknownOperation(method_name.to_owned()),
                callback,
            ),
        }
    }

    fn dispatch(&self, request: DynamoDBClientResult<OperationRequest>, callback: Callback) {
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                debug!(error = %e, "Rejected before sending");
                callback(Err(e));
                return;
            }
        };

        let client = self.client.clone();
        self.handle.spawn(async move {
            callback(client.execute(request).await);
        });
    }
}

/// Reads without a callback are skipped; writes run with a no-op.
fn callback_for(operation: DynamoDBOperation, callback: Option<Callback>) -> Option<Callback> {
    match callback {
        Some(callback) => Some(callback),
        None if operation.is_read() => None,
        None => Some(Box::new(|_| {})),
    }
}

fn reject(error: DynamoDBClientError, callback: Option<Callback>) {
    if let Some(callback) = callback {
        callback(Err(error));
    }
}

fn parse<T: DeserializeOwned>(params: Value) -> DynamoDBClientResult<T> {
    serde_json::from_value(params).map_err(DynamoDBClientError::InvalidParameters)
}
