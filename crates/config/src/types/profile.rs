//! Profile configuration types for the Dynatrace client.
//!
//! Responsibilities:
//! - Define `ProfileConfig` for storing named environment profiles.
//! - Support partial configuration (all fields optional) for layering under env vars.
//!
//! Invariants:
//! - All fields are optional to allow partial profile definitions.
//! - The API token uses `SecureValue` for flexible secret storage.

use crate::types::auth::SecureValue;
use crate::types::connection::TooManyRequestsStrategy;
use serde::{Deserialize, Serialize};

/// Profile configuration for storing named environment profiles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Environment URL
    pub base_url: Option<String>,
    /// API token (plain or keyring reference)
    pub api_token: Option<SecureValue>,
    /// Whether to skip TLS verification
    pub skip_verify: Option<bool>,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Maximum number of retries for failed requests
    pub max_retries: Option<usize>,
    /// Base delay between retries in milliseconds
    pub retry_delay_ms: Option<u64>,
    /// Behaviour on HTTP 429
    pub too_many_requests_strategy: Option<TooManyRequestsStrategy>,
    /// Optional HTTP(S) proxy URL
    pub proxy: Option<String>,
}
