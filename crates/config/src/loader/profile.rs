//! Profile file loading for configuration.
//!
//! Responsibilities:
//! - Load configuration from the JSON profile file.
//! - Apply profile settings to a ConfigLoader instance.
//!
//! Invariants:
//! - Profile settings are applied before environment variables (env vars take precedence).
//! - Missing profiles are recorded for later error handling in build().

use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::persistence::{default_config_path, read_config_file};
use crate::types::ProfileConfig;

/// Apply profile configuration from the profile file to the loader.
///
/// If the profile is not found, this records the missing profile name
/// for later error handling in `build()`.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let profile_name = match loader.profile_name() {
        Some(name) => name.clone(),
        None => return Ok(()),
    };

    let config_path = match loader.config_path() {
        Some(path) => path.clone(),
        None => default_config_path().ok_or(ConfigError::ConfigDirUnavailable)?,
    };

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "Profile file does not exist");
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    }

    let config_file = read_config_file(&config_path)?;

    match config_file.profiles.get(&profile_name) {
        Some(profile) => apply_profile_config(loader, profile),
        None => {
            loader.set_profile_missing(Some(profile_name));
            Ok(())
        }
    }
}

/// Apply profile configuration values to the loader.
fn apply_profile_config(
    loader: &mut ConfigLoader,
    profile: &ProfileConfig,
) -> Result<(), ConfigError> {
    if let Some(url) = &profile.base_url {
        loader.set_base_url(Some(url.clone()));
    }
    if let Some(token) = &profile.api_token {
        loader.set_api_token(Some(token.resolve()?));
    }
    if let Some(skip) = profile.skip_verify {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = profile.timeout_seconds {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = profile.max_retries {
        loader.set_max_retries(Some(retries));
    }
    if let Some(delay) = profile.retry_delay_ms {
        loader.set_retry_delay_ms(Some(delay));
    }
    if let Some(strategy) = profile.too_many_requests_strategy {
        loader.set_too_many_requests_strategy(Some(strategy));
    }
    if let Some(proxy) = &profile.proxy {
        loader.set_proxy(Some(proxy.clone()));
    }
    Ok(())
}
