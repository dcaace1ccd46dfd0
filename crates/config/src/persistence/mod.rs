//! Profile file access.
//!
//! Responsibilities:
//! - Locate the standard profile file path.
//! - Read and parse the profile file (`ConfigFile`).
//!
//! Does NOT handle:
//! - Loading environment variables (see `loader`).
//! - Merging profile values with other sources (see `loader`).
//! - Writing the profile file; profiles are managed by the user.
//!
//! Invariants:
//! - Profile names are unique within a configuration file (map keys).
//! - Parse errors carry the path but never the file content, which may hold tokens.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::ProfileConfig;

mod path;

pub use path::default_config_path;

/// Representation of the profile file on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Named profiles for different Dynatrace environments.
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}

/// Errors that can occur when reading the profile file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Reads and parses the profile file from disk.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str::<ConfigFile>(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
