// Custom error types for better error handling and debugging
//
// Using thiserror for ergonomic error definitions with:
// - Context preservation
// - Type-safe error matching
// - Automatic Display/Error trait implementations
// - Source error chaining

use thiserror::Error;

/// Translation service errors.
///
/// These never cross the pipeline boundary: the `Translator` wrapper absorbs
/// them and falls back to the original text.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Translation request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Translation service returned status {status}")]
    ServiceStatus { status: i64 },

    #[error("Invalid translation response: {0}")]
    InvalidResponse(String),
}

/// Photo search errors.
///
/// Absorbed by `PhotoResolver`, which substitutes the fallback URL template.
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("Photo search request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Photo search returned HTTP {status}")]
    BadStatus { status: u16 },

    #[error("Photo search returned no usable results for {query:?}")]
    NoResults { query: String },

    #[error("No photo search API key configured")]
    MissingApiKey,
}

/// Fatal pipeline errors.
///
/// Only these two conditions terminate a run in the `Failed` state; every
/// per-item enrichment failure is handled inside the service wrappers.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("No image found. Please upload an image first.")]
    MissingImage,

    #[error("Text recognition failed: {source}")]
    RecognitionFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Request timeout must be > 0 seconds, got {0}")]
    InvalidRequestTimeout(u64),

    #[error("Connect timeout must be > 0 seconds, got {0}")]
    InvalidConnectTimeout(u64),

    #[error("Photo fallback URL template must not be empty")]
    EmptyFallbackTemplate,

    #[error("Default photo query must not be empty")]
    EmptyDefaultQuery,
}

// Convenience type aliases for Results
pub type TranslationResult<T> = Result<T, TranslationError>;
pub type PhotoResult<T> = Result<T, PhotoError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
