//! Configuration management for the storefront backend.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Image-generation service configuration
    pub imagegen: ImagegenConfig,
    /// Catalog source configuration
    pub catalog: CatalogConfig,
    /// Order submission configuration
    pub checkout: CheckoutConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Image-generation service configuration
#[derive(Debug, Clone)]
pub struct ImagegenConfig {
    /// Base URL of the generation endpoint
    pub base_url: String,
    /// Optional API key; kept server-side, never logged
    pub api_key: Option<String>,
    /// Model name
    pub model: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum generation attempts
    pub retry_attempts: u32,
    /// Preview cache capacity (entries)
    pub cache_capacity: usize,
    /// Preview cache TTL
    pub cache_ttl: Duration,
}

/// Catalog source configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Remote catalog endpoint; built-in data only when unset
    pub remote_url: Option<String>,
    /// Remote fetch timeout
    pub fetch_timeout: Duration,
}

/// Order submission configuration
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Remote order API; orders are accepted locally when unset
    pub submit_url: Option<String>,
    /// Submission timeout
    pub timeout: Duration,
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env_parsed("PORT", 8080),
                log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            },
            imagegen: ImagegenConfig {
                base_url: env::var("POLLINATIONS_BASE_URL")
                    .unwrap_or_else(|_| "https://image.pollinations.ai".to_string()),
                api_key: env::var("POLLINATIONS_API_KEY").ok(),
                model: env::var("IMAGE_MODEL").unwrap_or_else(|_| "flux".to_string()),
                timeout: Duration::from_secs(env_parsed("IMAGE_TIMEOUT_SECS", 60)),
                retry_attempts: env_parsed("IMAGE_RETRY_ATTEMPTS", 3),
                cache_capacity: env_parsed("PREVIEW_CACHE_CAPACITY", 128),
                cache_ttl: Duration::from_secs(env_parsed("PREVIEW_CACHE_TTL_SECS", 3600)),
            },
            catalog: CatalogConfig {
                remote_url: env::var("CATALOG_URL").ok(),
                fetch_timeout: Duration::from_secs(env_parsed("CATALOG_TIMEOUT_SECS", 5)),
            },
            checkout: CheckoutConfig {
                submit_url: env::var("ORDER_API_URL").ok(),
                timeout: Duration::from_secs(env_parsed("ORDER_TIMEOUT_SECS", 10)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        // Only asserts defaults for variables that are unlikely to be set
        // in a test environment.
        let config = Config::from_env();
        assert!(!config.server.host.is_empty());
        assert_eq!(config.imagegen.model, "flux");
        assert!(config.imagegen.retry_attempts >= 1);
    }
}
