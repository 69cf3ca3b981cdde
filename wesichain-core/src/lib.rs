mod document;
mod error;
mod retriever;

pub use document::Document;
pub use error::RetrievalError;
pub use retriever::BaseRetriever;

pub type Value = serde_json::Value;
