use reqwest::StatusCode;
use thiserror::Error;
use wesichain_core::RetrievalError;

#[derive(Debug, Error)]
pub enum PerigonError {
    #[error("invalid configuration: no api key given and PERIGON_API_KEY is not set")]
    MissingApiKey,
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("perigon api error {status}: {reason}")]
    Http { status: u16, reason: String },
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("perigon request was cancelled")]
    Cancelled,
}

impl PerigonError {
    /// Builds the error both transports return for a non-success status.
    pub(crate) fn from_status(status: StatusCode) -> Self {
        PerigonError::Http {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

impl From<PerigonError> for RetrievalError {
    fn from(value: PerigonError) -> Self {
        match value {
            PerigonError::Cancelled => RetrievalError::Cancelled,
            err @ (PerigonError::MissingApiKey | PerigonError::Config(_)) => {
                RetrievalError::InvalidConfig(err.to_string())
            }
            other => RetrievalError::Backend(Box::new(other)),
        }
    }
}
