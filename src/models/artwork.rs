//! Internal artwork models handed to callers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::LinkedArtObject;

/// Display text used for fields that are only known after a detail fetch.
pub const LOADING: &str = "Loading...";

/// Default title when a record carries no usable title statement.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Default creator when no production agent is labelled.
pub const UNKNOWN_CREATOR: &str = "Unknown Creator";

/// Default date when the production time span is missing.
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// Unit label used when a dimension has no labelled unit.
pub const UNKNOWN_UNIT: &str = "unknown";

/// Image metadata attached to a summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Dating information attached to a summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dating {
    pub presenting_date: String,
    pub period: i32,
    pub sorting_date: i32,
}

/// One search hit before its detail record has been fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkSummary {
    pub id: String,
    pub object_number: String,
    pub title: String,
    pub long_title: String,
    pub principal_or_first_maker: String,
    pub web_image: ImageRef,
    pub header_image: ImageRef,
    pub production_places: Vec<String>,
    pub dating: Dating,
}

impl ArtworkSummary {
    /// Create a placeholder summary for an object whose details are pending
    pub fn pending(id: impl Into<String>, object_number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object_number: object_number.into(),
            title: LOADING.to_string(),
            long_title: LOADING.to_string(),
            principal_or_first_maker: LOADING.to_string(),
            web_image: ImageRef::default(),
            header_image: ImageRef::default(),
            production_places: Vec::new(),
            dating: Dating::default(),
        }
    }
}

/// Facet counts; always zero for Linked Art search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountFacets {
    pub hasimage: u64,
    pub ondisplay: u64,
}

/// A single facet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    pub key: String,
    pub value: u64,
}

/// A facet group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facet {
    pub facets: Vec<FacetValue>,
    pub name: String,
    pub other_terms: u64,
    pub pretty_name: u64,
}

/// A page of search results in the internal shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworksResponse {
    pub art_objects: Vec<ArtworkSummary>,
    pub count: u64,
    pub count_facets: CountFacets,
    pub elapsed_milliseconds: u64,
    pub facets: Vec<Facet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// An image drawn from a digital-object representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub url: Option<String>,
    pub label: Option<String>,
    pub format: Option<String>,
}

/// A measured dimension with a readable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionInfo {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub value: Option<super::DimensionValue>,
    pub unit: String,
}

/// Human-readable fields pulled out of a Linked Art record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedInfo {
    pub id: String,
    pub title: String,
    pub creator: String,
    pub date: String,
    pub materials: Vec<String>,
    pub techniques: Vec<String>,
    pub dimensions: Vec<DimensionInfo>,
    pub images: Vec<ImageInfo>,
}

impl Default for ExtractedInfo {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: UNKNOWN_TITLE.to_string(),
            creator: UNKNOWN_CREATOR.to_string(),
            date: UNKNOWN_DATE.to_string(),
            materials: Vec::new(),
            techniques: Vec::new(),
            dimensions: Vec::new(),
            images: Vec::new(),
        }
    }
}

/// Response envelope for a detail lookup.
///
/// `art_object` is the legacy collection-API shape and is never filled by
/// the Linked Art client; it stays so the envelope matches what callers of
/// the older API expect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub art_object: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_art: Option<LinkedArtObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_milliseconds: Option<u64>,
}

impl DetailEnvelope {
    /// Wrap a Linked Art record
    pub fn linked_art(record: LinkedArtObject) -> Self {
        Self {
            art_object: None,
            linked_art: Some(record),
            elapsed_milliseconds: Some(0),
        }
    }
}

/// A hydrated search hit: extracted detail plus where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkDetailItem {
    #[serde(flatten)]
    pub info: ExtractedInfo,
    pub original_id: String,
    pub object_id: String,
}
