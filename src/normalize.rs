//! Conversion of Linked Art search pages into the internal list shape.

use crate::models::{ArtworkSummary, ArtworksResponse, CollectionPage};

/// Marker preceding the continuation token in a next-page link.
const PAGE_TOKEN_MARKER: &str = "page=";

/// Convert a search result page into an [`ArtworksResponse`].
///
/// Items keep their order and are returned as pending placeholders; their
/// readable fields only become known through a detail lookup.
pub fn normalize_page(page: &CollectionPage) -> ArtworksResponse {
    let count = page
        .part_of
        .as_ref()
        .and_then(|part_of| part_of.total_items)
        .unwrap_or(0);

    let next_page_token = page
        .next
        .as_ref()
        .and_then(|next| next.id.as_deref())
        .and_then(page_token_from_link);

    let art_objects = page
        .ordered_items
        .iter()
        .map(|item| ArtworkSummary::pending(item.id.clone(), object_number_from_id(&item.id)))
        .collect();

    ArtworksResponse {
        art_objects,
        count,
        next_page_token,
        ..ArtworksResponse::default()
    }
}

/// Continuation token encoded in a next-page link.
///
/// Returns everything after the first `page=`, or `None` when the link does
/// not contain the marker. This is a string convention of the service, not
/// a structured field.
pub fn page_token_from_link(link: &str) -> Option<String> {
    link.split_once(PAGE_TOKEN_MARKER)
        .map(|(_, token)| token.to_string())
}

/// Final `/`-delimited segment of an object identifier.
pub fn object_number_from_id(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or_default()
}
