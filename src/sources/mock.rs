//! Mock source for testing purposes.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::models::{ArtworksResponse, DetailEnvelope, LinkedArtObject, SearchQuery};
use crate::sources::{CollectionSource, SourceError};

/// A mock source for testing that returns predefined responses.
///
/// Detail lookups are answered from registered records; unknown ids fail
/// with a 404 status error, ids marked as failing with a 500.
#[derive(Debug, Default)]
pub struct MockSource {
    search_response: Mutex<Option<ArtworksResponse>>,
    details: Mutex<HashMap<String, DetailEnvelope>>,
    failing: Mutex<HashSet<String>>,
    detail_calls: Mutex<Vec<String>>,
}

impl MockSource {
    /// Create a new mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search response to return.
    pub fn set_search_response(&self, response: ArtworksResponse) {
        let mut guard = self.search_response.lock().unwrap();
        *guard = Some(response);
    }

    /// Register a Linked Art record for an object id.
    pub fn add_detail(&self, object_id: impl Into<String>, record: LinkedArtObject) {
        self.add_envelope(object_id, DetailEnvelope::linked_art(record));
    }

    /// Register a raw envelope for an object id.
    pub fn add_envelope(&self, object_id: impl Into<String>, envelope: DetailEnvelope) {
        let mut guard = self.details.lock().unwrap();
        guard.insert(object_id.into(), envelope);
    }

    /// Make detail lookups for an object id fail.
    pub fn fail_detail(&self, object_id: impl Into<String>) {
        let mut guard = self.failing.lock().unwrap();
        guard.insert(object_id.into());
    }

    /// Object ids passed to `get_artwork_detail`, in call order.
    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }

    /// Clear the configured responses.
    pub fn clear_response(&self) {
        *self.search_response.lock().unwrap() = None;
        self.details.lock().unwrap().clear();
        self.failing.lock().unwrap().clear();
    }
}

#[async_trait]
impl CollectionSource for MockSource {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock Source"
    }

    async fn search_artworks(&self, _query: &SearchQuery) -> Result<ArtworksResponse, SourceError> {
        let guard = self.search_response.lock().unwrap();
        Ok(guard.clone().unwrap_or_default())
    }

    async fn get_artwork_detail(&self, object_id: &str) -> Result<DetailEnvelope, SourceError> {
        self.detail_calls.lock().unwrap().push(object_id.to_string());

        if self.failing.lock().unwrap().contains(object_id) {
            return Err(SourceError::Status {
                status: 500,
                url: format!("mock://{}", object_id),
            });
        }

        let guard = self.details.lock().unwrap();
        guard
            .get(object_id)
            .cloned()
            .ok_or_else(|| SourceError::Status {
                status: 404,
                url: format!("mock://{}", object_id),
            })
    }
}

/// Helper function to create a Linked Art record with a title and creator.
pub fn make_record(id: &str, title: &str, creator: &str) -> LinkedArtObject {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "type": "HumanMadeObject",
        "identified_by": [
            {"type": "Name", "content": title, "classified_as": [{"_label": "title"}]}
        ],
        "produced_by": {"carried_out_by": [{"_label": creator}]}
    }))
    .unwrap_or_default()
}
