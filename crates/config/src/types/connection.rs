//! Connection configuration types for the Dynatrace client.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeouts, retries).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `constants`, not magic numbers.

use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_MS, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::AuthConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// How the transport reacts to HTTP 429 responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooManyRequestsStrategy {
    /// Treat 429 like any other retryable status (exponential backoff).
    #[default]
    Fail,
    /// Sleep until the rate limit resets, as advertised by the server.
    Wait,
}

impl FromStr for TooManyRequestsStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "wait" => Ok(Self::Wait),
            other => Err(format!("expected 'fail' or 'wait', got '{other}'")),
        }
    }
}

impl fmt::Display for TooManyRequestsStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fail => write!(f, "fail"),
            Self::Wait => write!(f, "wait"),
        }
    }
}

/// Connection configuration for a Dynatrace environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Environment URL (e.g., https://abc12345.live.dynatrace.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed Managed clusters)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Maximum number of retries for failed requests
    pub max_retries: usize,
    /// Base delay between retries in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Behaviour on HTTP 429
    #[serde(default)]
    pub too_many_requests_strategy: TooManyRequestsStrategy,
    /// Optional HTTP(S) proxy URL
    #[serde(default)]
    pub proxy: Option<String>,
    /// Log request and response bodies at trace level
    #[serde(default)]
    pub log_bodies: bool,
}

pub(crate) fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY_MS
}

impl ConnectionConfig {
    /// Connection settings for `base_url` with every other field at its default.
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            too_many_requests_strategy: TooManyRequestsStrategy::default(),
            proxy: None,
            log_bodies: false,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a new config with the specified base URL and API token.
    pub fn with_api_token(base_url: String, api_token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth: AuthConfig { api_token },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_api_token_defaults() {
        let token = SecretString::new("test-token".to_string().into());
        let config = Config::with_api_token("https://abc.live.dynatrace.com".to_string(), token);

        assert_eq!(config.connection.base_url, "https://abc.live.dynatrace.com");
        assert!(!config.connection.skip_verify);
        assert_eq!(
            config.connection.timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
        assert_eq!(config.connection.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(config.connection.retry_delay_ms, DEFAULT_RETRY_DELAY_MS);
        assert_eq!(
            config.connection.too_many_requests_strategy,
            TooManyRequestsStrategy::Fail
        );
    }

    #[test]
    fn test_connection_config_serde_seconds() {
        let mut config = ConnectionConfig::new("https://abc.live.dynatrace.com".to_string());
        config.timeout = Duration::from_secs(60);
        config.max_retries = 5;

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"timeout\":60"));

        let deserialized: ConnectionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.timeout, Duration::from_secs(60));
        assert_eq!(deserialized.max_retries, 5);
    }

    #[test]
    fn test_connection_config_missing_optional_fields_use_defaults() {
        let json = r#"{
            "base_url": "https://abc.live.dynatrace.com",
            "skip_verify": false,
            "timeout": 10,
            "max_retries": 1
        }"#;
        let config: ConnectionConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.retry_delay_ms, DEFAULT_RETRY_DELAY_MS);
        assert_eq!(
            config.too_many_requests_strategy,
            TooManyRequestsStrategy::Fail
        );
        assert!(config.proxy.is_none());
        assert!(!config.log_bodies);
    }

    #[test]
    fn test_too_many_requests_strategy_parsing() {
        assert_eq!(
            "wait".parse::<TooManyRequestsStrategy>().unwrap(),
            TooManyRequestsStrategy::Wait
        );
        assert_eq!(
            "FAIL".parse::<TooManyRequestsStrategy>().unwrap(),
            TooManyRequestsStrategy::Fail
        );
        assert!("sometimes".parse::<TooManyRequestsStrategy>().is_err());
        assert_eq!(TooManyRequestsStrategy::Wait.to_string(), "wait");
    }

    #[test]
    fn test_config_debug_does_not_expose_token() {
        let token = SecretString::new("super-secret-api-token".to_string().into());
        let config = Config::with_api_token("https://abc.live.dynatrace.com".to_string(), token);

        let debug_output = format!("{:?}", config);

        assert!(
            !debug_output.contains("super-secret-api-token"),
            "Debug output should not contain the API token"
        );
        assert!(debug_output.contains("https://abc.live.dynatrace.com"));
    }
}
