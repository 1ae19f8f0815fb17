//! Collection sources behind an async trait.
//!
//! [`CollectionSource`] is the seam between callers (the CLI, batch
//! helpers) and a remote collection API. [`RijksmuseumSource`] talks to the
//! Rijksmuseum Linked Art endpoints; [`MockSource`] returns canned data for
//! tests.
//!
//! Sources never cache and never retry. A failed request is logged and
//! handed back to the caller as a [`SourceError`].

pub mod mock;
mod rijksmuseum;

pub use mock::MockSource;
pub use rijksmuseum::{
    resolve_detail_url, Endpoints, RijksmuseumSource, RESOLVER_API_BASE, SEARCH_API_BASE,
};

use crate::models::{ArtworksResponse, DetailEnvelope, SearchQuery};
use async_trait::async_trait;

/// Interface of a remote art collection.
#[async_trait]
pub trait CollectionSource: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Search the collection; results are placeholders pending detail
    async fn search_artworks(&self, _query: &SearchQuery) -> Result<ArtworksResponse, SourceError> {
        Err(SourceError::NotImplemented)
    }

    /// Fetch the full record of one object
    async fn get_artwork_detail(&self, _object_id: &str) -> Result<DetailEnvelope, SourceError> {
        Err(SourceError::NotImplemented)
    }
}

/// Errors that can occur when interacting with a source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The requested operation is not implemented for this source
    #[error("Operation not implemented for this source")]
    NotImplemented,

    /// The service answered with a non-success status
    #[error("API request failed with status {status}")]
    Status { status: u16, url: String },

    /// Network or transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl SourceError {
    /// HTTP status of the failed request, if the service answered
    pub fn status(&self) -> Option<u16> {
        match self {
            SourceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}

impl From<url::ParseError> for SourceError {
    fn from(err: url::ParseError) -> Self {
        SourceError::InvalidRequest(format!("URL: {}", err))
    }
}
