//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `DYNATRACE_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::MAX_MAX_RETRIES;
use crate::types::TooManyRequestsStrategy;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse an environment variable, mapping parse failures to `InvalidValue`.
fn parse_env<T: FromStr>(key: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
///
/// Only variables that are set override values already on the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("DYNATRACE_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(token) = env_var_or_none("DYNATRACE_API_TOKEN") {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = parse_env::<bool>("DYNATRACE_SKIP_VERIFY", "must be true or false")? {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = parse_env::<u64>("DYNATRACE_TIMEOUT", "must be a number")? {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) =
        parse_env::<usize>("DYNATRACE_MAX_RETRIES", "must be a non-negative integer")?
    {
        if retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!(
                    "must be between 0 and {} (got {})",
                    MAX_MAX_RETRIES, retries
                ),
            });
        }
        loader.set_max_retries(Some(retries));
    }
    if let Some(delay) = parse_env::<u64>("DYNATRACE_RETRY_DELAY_MS", "must be a number")? {
        loader.set_retry_delay_ms(Some(delay));
    }
    if let Some(strategy) = parse_env::<TooManyRequestsStrategy>(
        "DYNATRACE_TOO_MANY_REQUESTS",
        "must be 'fail' or 'wait'",
    )? {
        loader.set_too_many_requests_strategy(Some(strategy));
    }
    if let Some(proxy) = env_var_or_none("DYNATRACE_PROXY") {
        loader.set_proxy(Some(proxy));
    }
    if let Some(enabled) = parse_env::<bool>("DYNATRACE_LOG_BODIES", "must be true or false")? {
        loader.set_log_bodies(Some(enabled));
    }

    // Config path and profile name only if not already set by the caller
    if loader.config_path().is_none()
        && let Some(config_path) = env_var_or_none("DYNATRACE_CONFIG_PATH")
    {
        loader.set_config_path(Some(std::path::PathBuf::from(config_path)));
    }
    if loader.profile_name().is_none()
        && let Some(profile) = env_var_or_none("DYNATRACE_PROFILE")
    {
        loader.set_profile_name(Some(profile));
    }

    Ok(())
}
