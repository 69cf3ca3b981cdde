use std::fmt;
use std::time::Duration;

use crate::client::{PerigonClient, DEFAULT_BASE_URL, VECTOR_SEARCH_PATH};
use crate::types::PerigonConfig;
use crate::PerigonError;

pub const API_KEY_ENV: &str = "PERIGON_API_KEY";

#[derive(Default, Clone)]
pub struct PerigonClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    default_config: Option<PerigonConfig>,
    timeout: Option<Duration>,
}

impl fmt::Debug for PerigonClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_some() {
            "<redacted>"
        } else {
            "<none>"
        };

        f.debug_struct("PerigonClientBuilder")
            .field("api_key", &api_key)
            .field("base_url", &self.base_url)
            .field("default_config", &self.default_config)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl PerigonClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, value: impl Into<String>) -> Self {
        self.api_key = non_blank(value.into());
        self
    }

    pub fn api_key_from_env(mut self, var_name: &str) -> Self {
        if let Some(value) = std::env::var(var_name).ok().and_then(non_blank) {
            self.api_key = Some(value);
        }
        self
    }

    pub fn base_url(mut self, value: impl Into<String>) -> Self {
        self.base_url = Some(value.into());
        self
    }

    pub fn base_url_from_env(mut self, var_name: &str) -> Self {
        if let Ok(value) = std::env::var(var_name) {
            self.base_url = Some(value);
        }
        self
    }

    pub fn default_config(mut self, value: PerigonConfig) -> Self {
        self.default_config = Some(value);
        self
    }

    pub fn timeout(mut self, value: Duration) -> Self {
        self.timeout = Some(value);
        self
    }

    pub fn build(self) -> Result<PerigonClient, PerigonError> {
        let api_key = match self.api_key {
            Some(key) => key,
            None => std::env::var(API_KEY_ENV)
                .ok()
                .and_then(non_blank)
                .ok_or(PerigonError::MissingApiKey)?,
        };

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim().trim_end_matches('/');
        reqwest::Url::parse(base_url)
            .map_err(|err| PerigonError::Config(format!("invalid base_url: {err}")))?;
        let endpoint = format!("{base_url}{VECTOR_SEARCH_PATH}");

        if self.timeout == Some(Duration::ZERO) {
            return Err(PerigonError::Config(
                "timeout must be greater than 0".to_string(),
            ));
        }

        PerigonClient::new(
            endpoint,
            api_key,
            self.default_config.unwrap_or_else(PerigonConfig::standard),
            self.timeout,
        )
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
