use async_trait::async_trait;

use crate::{Document, RetrievalError};

/// Base trait for document retrievers.
///
/// Retrievers take a query string and return relevant documents from a backing
/// source, most relevant first. Implementations apply their own default
/// options; per-call options live on the concrete type.
#[async_trait]
pub trait BaseRetriever: Send + Sync {
    async fn retrieve(&self, query: &str) -> Result<Vec<Document>, RetrievalError>;

    /// Blocking counterpart of [`retrieve`](Self::retrieve). Must not be
    /// called from inside an async runtime.
    fn retrieve_blocking(&self, query: &str) -> Result<Vec<Document>, RetrievalError>;
}
