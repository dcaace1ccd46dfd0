//! Path helpers for the profile file location.
//!
//! Uses the `directories` crate for platform-appropriate paths.

use std::path::PathBuf;

use crate::constants::APP_DIR_NAME;

/// Returns the default path to the profile file.
///
/// - Linux: `~/.config/dynatrace-client/config.json`
/// - macOS: `~/Library/Application Support/dynatrace-client/config.json`
/// - Windows: `%AppData%\dynatrace-client\config\config.json`
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_DIR_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}
