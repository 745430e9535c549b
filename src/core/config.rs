use crate::core::errors::ConfigError;
use std::env;

/// HTTP transport configuration shared by the service clients
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

/// Translation service configuration
#[derive(Debug, Clone)]
pub struct TranslationConfig {
    /// Base URL of the MyMemory-compatible translation endpoint
    pub api_url: String,
}

/// Photo search configuration
#[derive(Debug, Clone)]
pub struct PhotoConfig {
    /// Base URL of the Unsplash-compatible search API
    pub api_url: String,
    /// Client-ID access key; empty means search is skipped and the fallback
    /// template is used directly
    pub access_key: String,
    /// Keyless fallback URL template; the encoded query is appended
    pub fallback_url_template: String,
    /// Substitute query for empty or whitespace-only item names
    pub default_query: String,
}

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub http: HttpConfig,
    pub translation: TranslationConfig,
    pub photo: PhotoConfig,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let config = Self::load_from_env();
        config.validate()?;
        Ok(config)
    }

    fn load_from_env() -> Self {
        Self {
            http: HttpConfig {
                request_timeout_secs: env::var("REQUEST_TIMEOUT_SECONDS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
                connect_timeout_secs: env::var("CONNECT_TIMEOUT_SECONDS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            },
            translation: TranslationConfig {
                api_url: env::var("TRANSLATION_API_URL")
                    .unwrap_or_else(|_| "https://api.mymemory.translated.net/get".to_string()),
            },
            photo: PhotoConfig {
                api_url: env::var("PHOTO_API_URL")
                    .unwrap_or_else(|_| "https://api.unsplash.com/search/photos".to_string()),
                access_key: env::var("UNSPLASH_ACCESS_KEY").unwrap_or_default(),
                fallback_url_template: env::var("PHOTO_FALLBACK_URL")
                    .unwrap_or_else(|_| "https://source.unsplash.com/400x300/?".to_string()),
                default_query: env::var("PHOTO_DEFAULT_QUERY")
                    .unwrap_or_else(|_| "food".to_string()),
            },
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidRequestTimeout(
                self.http.request_timeout_secs,
            ));
        }

        if self.http.connect_timeout_secs == 0 {
            return Err(ConfigError::InvalidConnectTimeout(
                self.http.connect_timeout_secs,
            ));
        }

        if self.photo.fallback_url_template.trim().is_empty() {
            return Err(ConfigError::EmptyFallbackTemplate);
        }

        if self.photo.default_query.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultQuery);
        }

        Ok(())
    }
}

impl Default for Config {
    /// Built-in defaults without touching the environment. Used by tests and
    /// callers that configure endpoints programmatically.
    fn default() -> Self {
        Self {
            http: HttpConfig {
                request_timeout_secs: 30,
                connect_timeout_secs: 10,
            },
            translation: TranslationConfig {
                api_url: "https://api.mymemory.translated.net/get".to_string(),
            },
            photo: PhotoConfig {
                api_url: "https://api.unsplash.com/search/photos".to_string(),
                access_key: String::new(),
                fallback_url_template: "https://source.unsplash.com/400x300/?".to_string(),
                default_query: "food".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.http.request_timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRequestTimeout(0))
        ));
    }

    #[test]
    fn test_empty_fallback_template_rejected() {
        let mut config = Config::default();
        config.photo.fallback_url_template = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyFallbackTemplate)
        ));
    }
}
