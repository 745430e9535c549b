// Photo search client and tiered resolver
//
// Tier 1 queries the Unsplash search API; any failure falls back to a
// keyless "random photo for this query" URL template, so the resolver never
// returns an empty result.

use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::core::config::Config;
use crate::core::errors::{PhotoError, PhotoResult};
use crate::core::types::Enriched;

/// A service resolving a free-text query to one photo URL.
pub trait PhotoSearch: Send + Sync {
    fn search(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = PhotoResult<String>> + Send;
}

/// Unsplash search response, reduced to the fields we consume
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    urls: Option<PhotoUrls>,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    small: Option<String>,
}

/// HTTP client for the Unsplash photo search API
pub struct UnsplashClient {
    api_url: String,
    access_key: String,
    http_client: reqwest::Client,
}

impl UnsplashClient {
    /// Create a new client from the shared configuration
    pub fn new(config: &Config) -> PhotoResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.http.connect_timeout_secs))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self {
            api_url: config.photo.api_url.clone(),
            access_key: config.photo.access_key.clone(),
            http_client,
        })
    }
}

impl PhotoSearch for UnsplashClient {
    /// One search request for one result; the first result's small-image URL
    /// is the answer.
    async fn search(&self, query: &str) -> PhotoResult<String> {
        if self.access_key.is_empty() {
            return Err(PhotoError::MissingApiKey);
        }

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("query", query), ("per_page", "1")])
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PhotoError::BadStatus {
                status: response.status().as_u16(),
            });
        }

        let body: SearchResponse = response.json().await?;

        body.results
            .into_iter()
            .next()
            .and_then(|result| result.urls)
            .and_then(|urls| urls.small)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| PhotoError::NoResults {
                query: query.to_string(),
            })
    }
}

/// Tiered photo resolver wrapping a `PhotoSearch`.
///
/// Never fails and never returns an empty URL: search failures fall back to
/// a deterministic URL built from the (encoded) query term.
pub struct PhotoResolver<P> {
    search: P,
    fallback_url_template: String,
    default_query: String,
}

impl<P: PhotoSearch> PhotoResolver<P> {
    pub fn new(search: P, config: &Config) -> Self {
        Self {
            search,
            fallback_url_template: config.photo.fallback_url_template.clone(),
            default_query: config.photo.default_query.clone(),
        }
    }

    /// Resolve a photo URL for `query`.
    ///
    /// Empty queries are substituted with the configured generic term before
    /// searching, so even a blank item name yields a plausible photo.
    #[instrument(skip(self))]
    pub async fn resolve(&self, query: &str) -> Enriched<String> {
        let term = query.trim();
        let term = if term.is_empty() {
            self.default_query.as_str()
        } else {
            term
        };

        match self.search.search(term).await {
            Ok(url) => {
                debug!("Photo search hit for {:?}", term);
                Enriched::exact(url)
            }
            Err(e) => {
                warn!("Photo search failed for {:?}, using fallback: {}", term, e);
                Enriched::degraded(format!(
                    "{}{}",
                    self.fallback_url_template,
                    urlencoding::encode(term)
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSearch {
        result: PhotoResult<String>,
    }

    impl FakeSearch {
        fn hit(url: &str) -> Self {
            Self {
                result: Ok(url.to_string()),
            }
        }

        fn miss() -> Self {
            Self {
                result: Err(PhotoError::NoResults {
                    query: String::new(),
                }),
            }
        }
    }

    impl PhotoSearch for FakeSearch {
        async fn search(&self, query: &str) -> PhotoResult<String> {
            match &self.result {
                Ok(url) => Ok(url.clone()),
                Err(_) => Err(PhotoError::NoResults {
                    query: query.to_string(),
                }),
            }
        }
    }

    fn resolver(search: FakeSearch) -> PhotoResolver<FakeSearch> {
        PhotoResolver::new(search, &Config::default())
    }

    #[tokio::test]
    async fn test_search_hit_is_exact() {
        let resolver = resolver(FakeSearch::hit("https://images.example/ramen-small.jpg"));
        let result = resolver.resolve("Ramen").await;
        assert_eq!(result.value, "https://images.example/ramen-small.jpg");
        assert!(!result.degraded);
    }

    #[tokio::test]
    async fn test_search_miss_uses_fallback_with_encoded_query() {
        let resolver = resolver(FakeSearch::miss());
        let result = resolver.resolve("Pad Thai").await;
        assert_eq!(
            result.value,
            "https://source.unsplash.com/400x300/?Pad%20Thai"
        );
        assert!(result.degraded);
    }

    #[tokio::test]
    async fn test_empty_query_substitutes_default_term() {
        let resolver = resolver(FakeSearch::miss());
        for query in ["", "   "] {
            let result = resolver.resolve(query).await;
            assert_eq!(result.value, "https://source.unsplash.com/400x300/?food");
            assert!(!result.value.is_empty());
        }
    }

    #[tokio::test]
    async fn test_url_unsafe_characters_are_encoded() {
        let resolver = resolver(FakeSearch::miss());
        let result = resolver.resolve("Fish & Chips / Pie?").await;
        assert_eq!(
            result.value,
            "https://source.unsplash.com/400x300/?Fish%20%26%20Chips%20%2F%20Pie%3F"
        );
    }

    #[test]
    fn test_search_response_parsing() {
        let body = r#"{
            "results": [
                { "urls": { "small": "https://images.example/a-small.jpg" } }
            ]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.results[0].urls.as_ref().unwrap().small.as_deref(),
            Some("https://images.example/a-small.jpg")
        );

        let body = r#"{ "results": [] }"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.results.is_empty());
    }
}
