//! Remote Linked Art response shapes.
//!
//! These mirror what the Rijksmuseum search and resolver endpoints emit.
//! Every field the service may omit is an `Option`; unknown fields are kept
//! in `extra` so the raw record survives a round trip through these types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Type discriminator of representation entries that are media assets.
pub const DIGITAL_OBJECT: &str = "DigitalObject";

/// A reference to another page of an ordered collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageRef {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// The collection a page belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartOf {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub total_items: Option<u64>,
    pub first: Option<PageRef>,
    pub last: Option<PageRef>,
}

/// A reference to one object in a search result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// One page of a Linked Art search (`OrderedCollectionPage`).
///
/// `ordered_items` is required: a page without it is not a search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPage {
    #[serde(rename = "@context")]
    pub context: Option<Value>,
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub part_of: Option<PartOf>,
    pub next: Option<PageRef>,
    pub prev: Option<PageRef>,
    pub ordered_items: Vec<ItemRef>,
}

/// A labelled vocabulary term (`classified_as`, `made_of`, units, agents).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "_label")]
    pub label: Option<String>,
}

/// A name or identifier statement (`identified_by`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub content: Option<String>,
    pub classified_as: Option<Vec<Term>>,
}

/// Begin and end bounds of a production event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSpan {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub begin_of_the_begin: Option<String>,
    pub end_of_the_end: Option<String>,
}

/// The production event (`produced_by`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Production {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub carried_out_by: Option<Vec<Term>>,
    pub timespan: Option<TimeSpan>,
}

/// A media entry (`representation`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Representation {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "_label")]
    pub label: Option<String>,
    pub format: Option<String>,
}

impl Representation {
    /// Whether this entry describes a digital media asset
    pub fn is_digital_object(&self) -> bool {
        self.kind.as_deref() == Some(DIGITAL_OBJECT)
    }
}

/// A measured value; the service usually sends numbers but strings occur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimensionValue {
    Number(f64),
    Text(String),
}

/// A physical dimension (`dimension`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub value: Option<DimensionValue>,
    pub unit: Option<Term>,
}

/// A full Linked Art object record as returned by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedArtObject {
    #[serde(rename = "@context", skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "_label", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classified_as: Option<Vec<Term>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identified_by: Option<Vec<Identifier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produced_by: Option<Production>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representation: Option<Vec<Representation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub made_of: Option<Vec<Term>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<Vec<Dimension>>,
    /// Fields this crate does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
