//! The `DynamoDBClient` service struct.

use std::fmt;
use std::sync::Arc;

use dynalink_auth::{RequestSigner, SigV4Signer};
use dynalink_http::{HttpTransport, ReqwestTransport};
use dynalink_model::input::{
    BatchWriteItemParams, DeleteItemParams, GetItemParams, PutItemParams, QueryParams,
};
use serde_json::{Map, Value};

use crate::config::DynamoDBClientConfig;
use crate::error::DynamoDBClientResult;
use crate::ops::{OperationRequest, batch_write_item, delete_item, get_item, put_item, query};
use crate::pipeline;

/// One method per operation, backed by injected signing and HTTP
/// collaborators.
///
/// Cloning is cheap. Calls share no mutable state, so a client can serve
/// any number of concurrent calls.
#[derive(Clone)]
pub struct DynamoDBClient {
    signer: Arc<dyn RequestSigner>,
    transport: Arc<dyn HttpTransport>,
    config: Arc<DynamoDBClientConfig>,
}

impl fmt::Debug for DynamoDBClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamoDBClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DynamoDBClient {
    /// Create a client around the given collaborators.
    #[must_use]
    pub fn new(signer: Arc<dyn RequestSigner>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            signer,
            transport,
            config: Arc::new(DynamoDBClientConfig::default()),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: DynamoDBClientConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    /// Create a client that signs with [`SigV4Signer`] and sends with
    /// [`ReqwestTransport`], set up from `config`.
    #[must_use]
    pub fn from_config(config: &DynamoDBClientConfig) -> Self {
        let mut transport = ReqwestTransport::new().with_crc32_verification(config.verify_crc32);
        if let Some(endpoint_url) = &config.endpoint_url {
            transport = transport.with_endpoint_url(endpoint_url.clone());
        }
        Self::new(Arc::new(SigV4Signer::new()), Arc::new(transport)).with_config(config.clone())
    }

    /// Create a client configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_config(&DynamoDBClientConfig::from_env())
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &DynamoDBClientConfig {
        &self.config
    }

    /// Store an item.
    pub async fn put_item(&self, params: PutItemParams) -> DynamoDBClientResult<Map<String, Value>> {
        self.execute(put_item::build(params)?).await
    }

    /// Fetch an item by key.
    pub async fn get_item(&self, params: GetItemParams) -> DynamoDBClientResult<Map<String, Value>> {
        self.execute(get_item::build(params)?).await
    }

    /// Remove an item by key.
    pub async fn delete_item(
        &self,
        params: DeleteItemParams,
    ) -> DynamoDBClientResult<Map<String, Value>> {
        self.execute(delete_item::build(params)?).await
    }

    /// Put and delete items across tables in one request.
    pub async fn batch_write_item(
        &self,
        params: BatchWriteItemParams,
    ) -> DynamoDBClientResult<Map<String, Value>> {
        self.execute(batch_write_item::build(params)?).await
    }

    /// Read the items sharing a hash key.
    pub async fn query(&self, params: QueryParams) -> DynamoDBClientResult<Map<String, Value>> {
        self.execute(query::build(params)?).await
    }

    /// Sign, send and decode an already built request.
    pub async fn execute(
        &self,
        request: OperationRequest,
    ) -> DynamoDBClientResult<Map<String, Value>> {
        pipeline::execute(
            request,
            self.signer.as_ref(),
            self.transport.as_ref(),
            self.config.log_bodies,
        )
        .await
    }
}
