//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `WORDPRESS_GRAPHQL_ENDPOINT` - Full URL of the WPGraphQL endpoint
//!   (e.g., `https://cms.example.com.br/graphql`)
//!
//! ## Optional
//! - `WORDPRESS_AUTH_TOKEN` - Bearer token for authenticated requests
//!   (needed for preview content and comment submission on locked-down hosts)
//! - `WORDPRESS_CACHE_TTL_SECS` - Response cache TTL in seconds (default: 300)
//! - `WORDPRESS_CACHE_CAPACITY` - Maximum cached entries (default: 1000)

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// WPGraphQL client configuration.
///
/// Implements `Debug` manually to redact the auth token.
#[derive(Clone)]
pub struct WordPressConfig {
    /// Full URL of the WPGraphQL endpoint
    pub endpoint: Url,
    /// Bearer token for authenticated requests (server-side only)
    pub auth_token: Option<SecretString>,
    /// TTL for cached query responses
    pub cache_ttl: Duration,
    /// Maximum number of cached responses
    pub cache_capacity: u64,
}

impl std::fmt::Debug for WordPressConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordPressConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field(
                "auth_token",
                &self.auth_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("cache_ttl", &self.cache_ttl)
            .field("cache_capacity", &self.cache_capacity)
            .finish()
    }
}

impl WordPressConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid, or
    /// if the auth token fails placeholder validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let endpoint = parse_endpoint(
            "WORDPRESS_GRAPHQL_ENDPOINT",
            &get_required_env("WORDPRESS_GRAPHQL_ENDPOINT")?,
        )?;

        let auth_token = match get_optional_env("WORDPRESS_AUTH_TOKEN") {
            Some(token) => {
                validate_token(&token, "WORDPRESS_AUTH_TOKEN")?;
                Some(SecretString::from(token))
            }
            None => None,
        };

        let cache_ttl_secs = get_env_or_default("WORDPRESS_CACHE_TTL_SECS", "300")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("WORDPRESS_CACHE_TTL_SECS".to_string(), e.to_string())
            })?;
        let cache_capacity = get_env_or_default("WORDPRESS_CACHE_CAPACITY", "1000")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("WORDPRESS_CACHE_CAPACITY".to_string(), e.to_string())
            })?;

        Ok(Self {
            endpoint,
            auth_token,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            cache_capacity,
        })
    }

    /// Exposed token value, if configured.
    ///
    /// Only the HTTP client construction path should call this.
    #[must_use]
    pub fn expose_auth_token(&self) -> Option<String> {
        self.auth_token
            .as_ref()
            .map(|t| t.expose_secret().to_string())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and validate the GraphQL endpoint URL.
fn parse_endpoint(var_name: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(url)
}

/// Validate that a token is not an obvious placeholder.
fn validate_token(token: &str, var_name: &str) -> Result<(), ConfigError> {
    if token.is_empty() {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            "token is empty".to_string(),
        ));
    }

    let lower = token.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}
