use std::fmt;
use std::sync::OnceLock;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use wesichain_core::Document;

use crate::config::PerigonClientBuilder;
use crate::mapper::parse_response;
use crate::types::{PerigonConfig, VectorSearchRequest};
use crate::PerigonError;

pub const DEFAULT_BASE_URL: &str = "https://api.goperigon.com";
pub const VECTOR_SEARCH_PATH: &str = "/v1/vector/news/all";
pub const API_KEY_HEADER: &str = "x-api-key";

/// Client for the Perigon news vector search endpoint.
///
/// Holds the resolved API key and a default [`PerigonConfig`]; both are fixed
/// at construction. Every call is a single POST with no retries.
pub struct PerigonClient {
    http: reqwest::Client,
    blocking: OnceLock<reqwest::blocking::Client>,
    endpoint: String,
    api_key: String,
    default_config: PerigonConfig,
    timeout: Option<Duration>,
}

impl fmt::Debug for PerigonClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PerigonClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("default_config", &self.default_config)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl PerigonClient {
    pub fn builder() -> PerigonClientBuilder {
        PerigonClientBuilder::new()
    }

    /// Builds a client from `PERIGON_API_KEY` with the standard configuration.
    pub fn from_env() -> Result<Self, PerigonError> {
        Self::builder().build()
    }

    pub(crate) fn new(
        endpoint: String,
        api_key: String,
        default_config: PerigonConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, PerigonError> {
        let mut http = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            http = http.timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|err| PerigonError::Config(format!("failed to build http client: {err}")))?;

        Ok(Self {
            http,
            blocking: OnceLock::new(),
            endpoint,
            api_key,
            default_config,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn default_config(&self) -> &PerigonConfig {
        &self.default_config
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn build_request(&self, query: &str, config: &PerigonConfig) -> VectorSearchRequest {
        VectorSearchRequest::new(query, config)
    }

    /// Blocking search. Must not be called from inside an async runtime.
    pub fn fetch_blocking(
        &self,
        query: &str,
        config: &PerigonConfig,
    ) -> Result<Vec<Document>, PerigonError> {
        let request = self.build_request(query, config);
        let span = search_span(&request, "blocking");
        let _guard = span.enter();

        let response = self
            .blocking_http()?
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()?;
        ensure_success(response.status())?;

        let raw = response
            .json::<Value>()
            .map_err(|err| PerigonError::Malformed(err.to_string()))?;
        Ok(finish(&raw))
    }

    /// Async search. Dropping the returned future aborts the request.
    pub async fn fetch(
        &self,
        query: &str,
        config: &PerigonConfig,
    ) -> Result<Vec<Document>, PerigonError> {
        let request = self.build_request(query, config);
        let span = search_span(&request, "async");

        async move {
            let response = self
                .http
                .post(&self.endpoint)
                .header(API_KEY_HEADER, &self.api_key)
                .json(&request)
                .send()
                .await?;
            ensure_success(response.status())?;

            let raw = response
                .json::<Value>()
                .await
                .map_err(|err| PerigonError::Malformed(err.to_string()))?;
            Ok(finish(&raw))
        }
        .instrument(span)
        .await
    }

    /// Like [`fetch`](Self::fetch), but returns [`PerigonError::Cancelled`]
    /// as soon as `token` is cancelled.
    pub async fn fetch_with_cancellation(
        &self,
        query: &str,
        config: &PerigonConfig,
        token: &CancellationToken,
    ) -> Result<Vec<Document>, PerigonError> {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!(endpoint = %self.endpoint, "perigon search cancelled");
                Err(PerigonError::Cancelled)
            }
            result = self.fetch(query, config) => result,
        }
    }

    fn blocking_http(&self) -> Result<&reqwest::blocking::Client, PerigonError> {
        if let Some(client) = self.blocking.get() {
            return Ok(client);
        }

        let client = blocking_builder(self.timeout)
            .build()
            .map_err(|err| PerigonError::Config(format!("failed to build http client: {err}")))?;
        Ok(self.blocking.get_or_init(|| client))
    }
}

/// The blocking builder carries a 30s default timeout; it is replaced so both
/// transports only time out when the caller asked for it.
fn blocking_builder(timeout: Option<Duration>) -> reqwest::blocking::ClientBuilder {
    reqwest::blocking::Client::builder().timeout(timeout)
}

fn search_span(request: &VectorSearchRequest, transport: &'static str) -> tracing::Span {
    tracing::info_span!(
        "perigon_search",
        size = ?request.config.size,
        has_filter = request.config.filter.is_some(),
        transport = transport,
    )
}

fn ensure_success(status: StatusCode) -> Result<(), PerigonError> {
    if status.is_success() {
        return Ok(());
    }
    tracing::warn!(status = status.as_u16(), "perigon search returned non-success status");
    Err(PerigonError::from_status(status))
}

fn finish(raw: &Value) -> Vec<Document> {
    let documents = parse_response(raw);
    tracing::debug!(results = documents.len(), "perigon search completed");
    documents
}
