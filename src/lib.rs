//! # Art Gallery Explorer
//!
//! A client for the Rijksmuseum collection, built on its Linked Art search
//! API and persistent identifier resolver.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Search queries, internal artwork shapes and the remote Linked Art records
//! - [`extract`]: Readable fields (title, creator, date, ...) from a Linked Art record
//! - [`normalize`]: Search result pages into placeholder summaries plus a continuation token
//! - [`sources`]: The [`CollectionSource`] trait and the Rijksmuseum client
//! - [`utils`]: HTTP client and sequential detail hydration
//! - [`config`]: Configuration management
//! - [`ui`]: Terminal output for the CLI

pub mod config;
pub mod extract;
pub mod models;
pub mod normalize;
pub mod sources;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use extract::extract_artwork_info;
pub use models::{ArtworksResponse, DetailEnvelope, ExtractedInfo, SearchQuery};
pub use normalize::normalize_page;
pub use sources::{CollectionSource, RijksmuseumSource, SourceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
