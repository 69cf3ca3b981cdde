use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Retrieval was cancelled")]
    Cancelled,
    #[error("Retriever backend error: {0}")]
    Backend(#[source] Box<dyn StdError + Send + Sync>),
}
