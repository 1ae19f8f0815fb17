//! Rijksmuseum collection source.
//!
//! Searches go to the Linked Art Search API and details are fetched through
//! the persistent identifier resolver, which redirects object identifiers to
//! their Linked Art record.
//! API documentation: <https://data.rijksmuseum.nl/docs/>

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

use crate::config::HttpConfig;
use crate::models::{
    ArtworksResponse, CollectionPage, DetailEnvelope, LinkedArtObject, SearchQuery,
};
use crate::normalize::normalize_page;
use crate::sources::{CollectionSource, SourceError};
use crate::utils::HttpClient;

/// Linked Art Search API base
pub const SEARCH_API_BASE: &str = "https://data.rijksmuseum.nl/search";

/// Persistent identifier resolver base; identifiers are appended verbatim
pub const RESOLVER_API_BASE: &str = "https://id.rijksmuseum.nl/";

/// Service bases used by [`RijksmuseumSource`].
///
/// Defaults to the public Rijksmuseum endpoints. Overriding them is meant
/// for pointing the source at a local mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub search: String,
    pub resolver: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            search: SEARCH_API_BASE.to_string(),
            resolver: RESOLVER_API_BASE.to_string(),
        }
    }
}

/// Rijksmuseum collection source
#[derive(Debug, Clone)]
pub struct RijksmuseumSource {
    client: Arc<HttpClient>,
    endpoints: Endpoints,
}

impl RijksmuseumSource {
    pub fn new() -> Result<Self, SourceError> {
        Self::from_config(&HttpConfig::default())
    }

    /// Create a source whose HTTP client follows the given settings
    pub fn from_config(config: &HttpConfig) -> Result<Self, SourceError> {
        Ok(Self::with_endpoints(
            HttpClient::from_config(config)?,
            Endpoints::default(),
        ))
    }

    /// Create a source against custom service bases
    pub fn with_endpoints(client: HttpClient, endpoints: Endpoints) -> Self {
        Self {
            client: Arc::new(client),
            endpoints,
        }
    }

    /// Service bases this source talks to
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Build the search URL for a query
    pub fn search_url(&self, query: &SearchQuery) -> Result<Url, SourceError> {
        let mut url = Url::parse(&format!(
            "{}/collection",
            self.endpoints.search.trim_end_matches('/')
        ))?;

        let params = query.to_params();
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())));
        }

        Ok(url)
    }

    /// Resolver URL for an object identifier
    pub fn detail_url(&self, object_id: &str) -> String {
        resolve_detail_url(&self.endpoints.resolver, object_id)
    }

    async fn fetch_artworks(&self, query: &SearchQuery) -> Result<ArtworksResponse, SourceError> {
        let url = self.search_url(query)?;
        tracing::debug!("Searching collection: {}", url);

        let page: CollectionPage = self.get_json(url.as_str()).await?;
        tracing::debug!(
            "Search returned {} items on this page",
            page.ordered_items.len()
        );

        Ok(normalize_page(&page))
    }

    async fn fetch_detail(&self, object_id: &str) -> Result<DetailEnvelope, SourceError> {
        let url = self.detail_url(object_id);
        tracing::debug!("Resolving artwork {}: {}", object_id, url);

        let record: LinkedArtObject = self.get_json(&url).await?;
        Ok(DetailEnvelope::linked_art(record))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| SourceError::Parse(format!("Failed to parse response from {}: {}", url, e)))
    }
}

#[async_trait]
impl CollectionSource for RijksmuseumSource {
    fn id(&self) -> &str {
        "rijksmuseum"
    }

    fn name(&self) -> &str {
        "Rijksmuseum"
    }

    async fn search_artworks(&self, query: &SearchQuery) -> Result<ArtworksResponse, SourceError> {
        self.fetch_artworks(query)
            .await
            .inspect_err(|e| tracing::error!("Error fetching artworks: {}", e))
    }

    async fn get_artwork_detail(&self, object_id: &str) -> Result<DetailEnvelope, SourceError> {
        self.fetch_detail(object_id).await.inspect_err(|e| {
            tracing::error!("Error fetching artwork detail for {}: {}", object_id, e)
        })
    }
}

/// Resolver URL for an object identifier.
///
/// Absolute URLs pass through untouched; anything else is appended to the
/// resolver base as-is, without encoding or extra path segments.
pub fn resolve_detail_url(resolver_base: &str, object_id: &str) -> String {
    if object_id.starts_with("https://") || object_id.starts_with("http://") {
        object_id.to_string()
    } else {
        format!("{}{}", resolver_base, object_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LOADING, UNKNOWN_TITLE};
    use mockito::Matcher;

    fn mock_source(server: &mockito::ServerGuard) -> RijksmuseumSource {
        RijksmuseumSource::with_endpoints(
            HttpClient::new().unwrap(),
            Endpoints {
                search: format!("{}/search", server.url()),
                resolver: format!("{}/", server.url()),
            },
        )
    }

    const PAGE: &str = r#"{
        "@context": "https://linked.art/ns/v1/search.json",
        "id": "https://data.rijksmuseum.nl/search/collection?title=Night+Watch",
        "type": "OrderedCollectionPage",
        "partOf": {
            "id": "https://data.rijksmuseum.nl/search/collection",
            "type": "OrderedCollection",
            "totalItems": 2
        },
        "next": {
            "id": "https://data.rijksmuseum.nl/search/collection?pageToken=AAE",
            "type": "OrderedCollectionPage"
        },
        "orderedItems": [
            {"id": "https://id.rijksmuseum.nl/200100988", "type": "HumanMadeObject"},
            {"id": "https://id.rijksmuseum.nl/200107928", "type": "HumanMadeObject"}
        ]
    }"#;

    #[test]
    fn test_source_creation() {
        let source = RijksmuseumSource::new();
        assert!(source.is_ok());
        assert_eq!(source.unwrap().endpoints(), &Endpoints::default());
    }

    #[test]
    fn test_search_url_encodes_title() {
        let source = RijksmuseumSource::new().unwrap();
        let url = source
            .search_url(&SearchQuery::new().title("Night Watch"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://data.rijksmuseum.nl/search/collection?q=Night+Watch"
        );
    }

    #[test]
    fn test_search_url_without_params() {
        let source = RijksmuseumSource::new().unwrap();
        let url = source.search_url(&SearchQuery::new()).unwrap();
        assert_eq!(url.as_str(), "https://data.rijksmuseum.nl/search/collection");
    }

    #[test]
    fn test_search_url_title_and_creator_send_q_twice() {
        let source = RijksmuseumSource::new().unwrap();
        let url = source
            .search_url(
                &SearchQuery::new()
                    .title("Night Watch")
                    .creator(vec!["Rembrandt".to_string(), "Bol".to_string()])
                    .page(2)
                    .limit(10),
            )
            .unwrap();
        assert_eq!(url.query(), Some("q=Night+Watch&q=Rembrandt+OR+Bol&page=2&limit=10"));
    }

    #[test]
    fn test_detail_url_appends_identifier() {
        assert_eq!(
            resolve_detail_url(RESOLVER_API_BASE, "200100988"),
            "https://id.rijksmuseum.nl/200100988"
        );
        let source = RijksmuseumSource::new().unwrap();
        assert_eq!(
            source.detail_url("200100988"),
            format!("{}200100988", RESOLVER_API_BASE)
        );
    }

    #[test]
    fn test_detail_url_keeps_absolute_urls() {
        let url = "https://data.rijksmuseum.nl/200100988";
        assert_eq!(resolve_detail_url(RESOLVER_API_BASE, url), url);
    }

    #[tokio::test]
    async fn test_search_against_mock_server() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search/collection")
            .match_query(Matcher::UrlEncoded("q".into(), "Night Watch".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(PAGE)
            .create_async()
            .await;

        let source = mock_source(&server);
        let response = source
            .search_artworks(&SearchQuery::new().title("Night Watch"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.count, 2);
        assert_eq!(response.art_objects.len(), 2);
        assert_eq!(response.art_objects[0].object_number, "200100988");
        assert_eq!(response.art_objects[0].title, LOADING);
        assert_eq!(response.next_page_token, None);
    }

    #[tokio::test]
    async fn test_search_not_found_is_status_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/collection")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let source = mock_source(&server);
        let err = source
            .search_artworks(&SearchQuery::new().title("Night Watch"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_search_invalid_body_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/collection")
            .with_status(200)
            .with_body(r#"{"type": "OrderedCollectionPage"}"#)
            .create_async()
            .await;

        let source = mock_source(&server);
        let err = source.search_artworks(&SearchQuery::new()).await.unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[tokio::test]
    async fn test_detail_against_mock_server() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/200100988")
            .with_status(200)
            .with_header("content-type", "application/ld+json")
            .with_body(r#"{"id": "https://id.rijksmuseum.nl/200100988", "type": "HumanMadeObject"}"#)
            .create_async()
            .await;

        let source = mock_source(&server);
        let envelope = source.get_artwork_detail("200100988").await.unwrap();

        mock.assert_async().await;
        assert!(envelope.art_object.is_none());
        assert_eq!(envelope.elapsed_milliseconds, Some(0));
        let record = envelope.linked_art.unwrap();
        assert_eq!(record.id.as_deref(), Some("https://id.rijksmuseum.nl/200100988"));

        let info = crate::extract::extract_artwork_info(&record);
        assert_eq!(info.title, UNKNOWN_TITLE);
    }

    #[tokio::test]
    async fn test_detail_server_error_is_status_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/999")
            .with_status(500)
            .create_async()
            .await;

        let source = mock_source(&server);
        let err = source.get_artwork_detail("999").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_network_error() {
        let source = RijksmuseumSource::with_endpoints(
            HttpClient::new().unwrap(),
            Endpoints {
                search: "http://127.0.0.1:1/search".to_string(),
                resolver: "http://127.0.0.1:1/".to_string(),
            },
        );

        let err = source
            .search_artworks(&SearchQuery::new().title("Night Watch"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Network(_)));
        assert_eq!(err.status(), None);

        let err = source.get_artwork_detail("200100988").await.unwrap_err();
        assert!(matches!(err, SourceError::Network(_)));
        assert_eq!(err.status(), None);
    }
}
