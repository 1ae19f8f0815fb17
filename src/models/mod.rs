//! Core data models for artworks, search queries and Linked Art records.

mod artwork;
mod linked_art;
mod search;

pub use artwork::{
    ArtworkDetailItem, ArtworkSummary, ArtworksResponse, CountFacets, Dating, DetailEnvelope,
    DimensionInfo, ExtractedInfo, Facet, FacetValue, ImageInfo, ImageRef, LOADING,
    UNKNOWN_CREATOR, UNKNOWN_DATE, UNKNOWN_TITLE, UNKNOWN_UNIT,
};
pub use linked_art::{
    CollectionPage, Dimension, DimensionValue, Identifier, ItemRef, LinkedArtObject, PageRef,
    PartOf, Production, Representation, Term, TimeSpan, DIGITAL_OBJECT,
};
pub use search::{Creator, SearchQuery};
