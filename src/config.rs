use std::env;

/// Default API base URL (local backend)
const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api";

/// Environment variable overriding the API base URL
const API_URL_ENV: &str = "REDSOCIAL_API_URL";

/// Client configuration: where the remote API lives.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let base_url = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self { base_url }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pointing at an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The configured API base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}
