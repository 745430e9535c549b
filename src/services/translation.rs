// Translation service client and best-effort wrapper
//
// The wire client targets the MyMemory REST API; the `Translator` wrapper
// implements the pipeline-facing contract: identity fast path, one attempt,
// and graceful degradation to the original text on any failure.

use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::core::config::Config;
use crate::core::errors::{TranslationError, TranslationResult};
use crate::core::types::Enriched;

/// A service translating text between two-letter language codes.
pub trait TranslationService: Send + Sync {
    fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> impl std::future::Future<Output = TranslationResult<String>> + Send;
}

/// MyMemory API response envelope
#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseStatus")]
    response_status: i64,
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryData>,
}

#[derive(Debug, Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// HTTP client for the MyMemory translation API
pub struct MyMemoryClient {
    api_url: String,
    http_client: reqwest::Client,
}

impl MyMemoryClient {
    /// Create a new client from the shared configuration
    pub fn new(config: &Config) -> TranslationResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.http.connect_timeout_secs))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self {
            api_url: config.translation.api_url.clone(),
            http_client,
        })
    }
}

impl TranslationService for MyMemoryClient {
    /// One request, no retries. Success requires `responseStatus == 200` and
    /// a translated-text payload; any other shape is an error.
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> TranslationResult<String> {
        let langpair = format!("{}|{}", source, target);

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await?;

        let body: MyMemoryResponse = response.json().await?;

        if body.response_status != 200 {
            return Err(TranslationError::ServiceStatus {
                status: body.response_status,
            });
        }

        body.response_data
            .and_then(|data| data.translated_text)
            .ok_or_else(|| {
                TranslationError::InvalidResponse("missing translatedText field".to_string())
            })
    }
}

/// Best-effort translator wrapping a `TranslationService`.
///
/// Never fails the caller: a failed service call yields the original text,
/// marked degraded.
pub struct Translator<S> {
    service: S,
}

impl<S: TranslationService> Translator<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Translate `text` from `source` to `target` (two-letter codes).
    ///
    /// Identical language pair or empty text short-circuits without a network
    /// call.
    #[instrument(skip(self, text), fields(source = source, target = target))]
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> Enriched<String> {
        if source == target || text.trim().is_empty() {
            return Enriched::exact(text.to_string());
        }

        match self.service.translate(text, source, target).await {
            Ok(translated) => {
                debug!("Translated {:?} -> {:?}", text, translated);
                Enriched::exact(translated)
            }
            Err(e) => {
                warn!("Translation failed, using original text: {}", e);
                Enriched::degraded(text.to_string())
            }
        }
    }
}
