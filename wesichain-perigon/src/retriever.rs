use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use wesichain_core::{BaseRetriever, Document, RetrievalError};

use crate::client::PerigonClient;
use crate::types::PerigonConfig;
use crate::PerigonError;

/// Retriever over Perigon news search.
///
/// Each call uses the config passed in when there is one, otherwise the
/// client's default config. The two are never merged.
#[derive(Clone, Debug)]
pub struct PerigonRetriever {
    client: Arc<PerigonClient>,
}

impl PerigonRetriever {
    pub fn new(client: PerigonClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn from_shared(client: Arc<PerigonClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &PerigonClient {
        &self.client
    }

    fn select_config<'a>(&'a self, config: Option<&'a PerigonConfig>) -> &'a PerigonConfig {
        config.unwrap_or_else(|| self.client.default_config())
    }

    pub fn retrieve_blocking(
        &self,
        query: &str,
        config: Option<&PerigonConfig>,
    ) -> Result<Vec<Document>, PerigonError> {
        self.client.fetch_blocking(query, self.select_config(config))
    }

    pub async fn retrieve(
        &self,
        query: &str,
        config: Option<&PerigonConfig>,
    ) -> Result<Vec<Document>, PerigonError> {
        self.client.fetch(query, self.select_config(config)).await
    }

    pub async fn retrieve_with_cancellation(
        &self,
        query: &str,
        config: Option<&PerigonConfig>,
        token: &CancellationToken,
    ) -> Result<Vec<Document>, PerigonError> {
        self.client
            .fetch_with_cancellation(query, self.select_config(config), token)
            .await
    }
}

#[async_trait]
impl BaseRetriever for PerigonRetriever {
    async fn retrieve(&self, query: &str) -> Result<Vec<Document>, RetrievalError> {
        PerigonRetriever::retrieve(self, query, None)
            .await
            .map_err(RetrievalError::from)
    }

    fn retrieve_blocking(&self, query: &str) -> Result<Vec<Document>, RetrievalError> {
        PerigonRetriever::retrieve_blocking(self, query, None).map_err(RetrievalError::from)
    }
}
