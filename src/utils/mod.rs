//! Utility modules supporting collection access.
//!
//! - [`HttpClient`]: shared HTTP client built from the transport settings
//! - [`fetch_details`]: hydrate search results with detail lookups, one at a
//!   time, skipping items that fail
//!
//! # Hydrating a search page
//!
//! ```rust,no_run
//! use art_gallery_explorer::models::SearchQuery;
//! use art_gallery_explorer::sources::{CollectionSource, RijksmuseumSource};
//! use art_gallery_explorer::utils::fetch_details;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = RijksmuseumSource::new()?;
//! let page = source
//!     .search_artworks(&SearchQuery::new().creator("Rembrandt"))
//!     .await?;
//! let details = fetch_details(&source, &page, 6).await;
//! println!("Fetched {} artworks with images", details.len());
//! # Ok(())
//! # }
//! ```

mod details;
mod http;

pub use details::fetch_details;
pub use http::HttpClient;
