use serde::{Deserialize, Serialize};

use crate::filter::PerigonFilter;

pub const DEFAULT_SIZE: usize = 10;
pub const DEFAULT_SHOW_REPRINTS: bool = true;

/// Options for one vector search request.
///
/// `PerigonConfig::default()` leaves every field unset; unset fields are not
/// sent. [`PerigonConfig::standard`] is the configuration a client falls back
/// to when it is built without one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerigonConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pub_date_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_reprints: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<PerigonFilter>,
}

impl PerigonConfig {
    /// `size = 10`, `showReprints = true`, no filter.
    pub fn standard() -> Self {
        Self {
            size: Some(DEFAULT_SIZE),
            show_reprints: Some(DEFAULT_SHOW_REPRINTS),
            ..Self::default()
        }
    }

    pub fn pub_date_from(mut self, value: impl Into<String>) -> Self {
        self.pub_date_from = Some(value.into());
        self
    }

    pub fn pub_date_to(mut self, value: impl Into<String>) -> Self {
        self.pub_date_to = Some(value.into());
        self
    }

    pub fn size(mut self, value: usize) -> Self {
        self.size = Some(value);
        self
    }

    pub fn show_reprints(mut self, value: bool) -> Self {
        self.show_reprints = Some(value);
        self
    }

    pub fn filter(mut self, value: impl Into<PerigonFilter>) -> Self {
        self.filter = Some(value.into());
        self
    }
}

/// Body POSTed to the vector search endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VectorSearchRequest {
    pub prompt: String,
    #[serde(flatten)]
    pub config: PerigonConfig,
}

impl VectorSearchRequest {
    pub fn new(query: &str, config: &PerigonConfig) -> Self {
        Self {
            prompt: query.to_string(),
            config: config.clone(),
        }
    }
}
