//! Sequential detail hydration for search results.

use crate::extract::extract_artwork_info;
use crate::models::{ArtworkDetailItem, ArtworksResponse};
use crate::normalize::object_number_from_id;
use crate::sources::CollectionSource;

/// Fetch and extract details for the first `max_items` results.
///
/// Lookups run one at a time in result order. An item whose lookup fails,
/// whose id has no object segment, or whose envelope carries no Linked Art
/// record is skipped; the batch itself never fails.
pub async fn fetch_details<S>(
    source: &S,
    response: &ArtworksResponse,
    max_items: usize,
) -> Vec<ArtworkDetailItem>
where
    S: CollectionSource + ?Sized,
{
    let mut items = Vec::new();

    for (index, artwork) in response.art_objects.iter().take(max_items).enumerate() {
        let object_id = object_number_from_id(&artwork.id);
        if object_id.is_empty() {
            tracing::warn!("Skipping artwork {} without an object id: {}", index, artwork.id);
            continue;
        }

        match source.get_artwork_detail(object_id).await {
            Ok(detail) => match detail.linked_art {
                Some(record) => items.push(ArtworkDetailItem {
                    info: extract_artwork_info(&record),
                    original_id: artwork.id.clone(),
                    object_id: object_id.to_string(),
                }),
                None => tracing::debug!("No Linked Art record for artwork {}", object_id),
            },
            Err(e) => {
                tracing::warn!("Failed to fetch detail for artwork {}: {}", index, e);
            }
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArtworkSummary, DetailEnvelope};
    use crate::sources::mock::make_record;
    use crate::sources::MockSource;

    fn response(ids: &[&str]) -> ArtworksResponse {
        ArtworksResponse {
            art_objects: ids
                .iter()
                .map(|id| ArtworkSummary::pending(*id, object_number_from_id(id)))
                .collect(),
            count: ids.len() as u64,
            ..ArtworksResponse::default()
        }
    }

    #[tokio::test]
    async fn test_failed_items_are_skipped() {
        let source = MockSource::new();
        source.add_detail("1", make_record("https://id.rijksmuseum.nl/1", "One", "A"));
        source.fail_detail("2");
        source.add_detail("3", make_record("https://id.rijksmuseum.nl/3", "Three", "C"));

        let page = response(&[
            "https://id.rijksmuseum.nl/1",
            "https://id.rijksmuseum.nl/2",
            "https://id.rijksmuseum.nl/3",
        ]);
        let items = fetch_details(&source, &page, 6).await;

        assert_eq!(source.detail_calls(), vec!["1", "2", "3"]);
        let titles: Vec<&str> = items.iter().map(|i| i.info.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Three"]);
        assert_eq!(items[1].object_id, "3");
        assert_eq!(items[1].original_id, "https://id.rijksmuseum.nl/3");
    }

    #[tokio::test]
    async fn test_respects_max_items() {
        let source = MockSource::new();
        for id in ["1", "2", "3"] {
            source.add_detail(id, make_record(id, id, "X"));
        }
        let page = response(&[
            "https://id.rijksmuseum.nl/1",
            "https://id.rijksmuseum.nl/2",
            "https://id.rijksmuseum.nl/3",
        ]);

        let items = fetch_details(&source, &page, 2).await;
        assert_eq!(items.len(), 2);
        assert_eq!(source.detail_calls(), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_empty_object_id_and_legacy_envelope_skipped() {
        let source = MockSource::new();
        source.add_envelope("2", DetailEnvelope::default());
        let page = response(&["https://id.rijksmuseum.nl/", "https://id.rijksmuseum.nl/2"]);

        let items = fetch_details(&source, &page, 6).await;
        assert!(items.is_empty());
        assert_eq!(source.detail_calls(), vec!["2"]);
    }
}
