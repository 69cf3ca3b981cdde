//! Perigon news vector search integration for Wesichain.
//!
//! This crate provides a `PerigonRetriever` with:
//! - typed request options (`PerigonConfig`) and recursive filters (`PerigonFilter`),
//! - blocking and async search over one `PerigonClient`,
//! - news results mapped to `wesichain_core::Document` (summary as content,
//!   article fields as metadata).
//!
//! Environment variables commonly used in examples:
//! - `PERIGON_API_KEY`
//! - `PERIGON_BASE_URL` (optional)

pub mod client;
mod config;
mod error;
pub mod filter;
pub mod mapper;
mod retriever;
mod types;

pub use client::PerigonClient;
pub use config::{PerigonClientBuilder, API_KEY_ENV};
pub use error::PerigonError;
pub use filter::{FilterPredicates, FilterValue, PerigonCoordinates, PerigonFilter};
pub use retriever::PerigonRetriever;
pub use types::{PerigonConfig, VectorSearchRequest, DEFAULT_SHOW_REPRINTS, DEFAULT_SIZE};
