//! Configuration management for the Dynatrace client.
//!
//! This crate provides types and loaders for managing Dynatrace environment
//! connection settings from builder calls, environment variables, `.env`
//! files and JSON profile files.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{ConfigFile, ConfigFileError};
pub use types::{
    AuthConfig, Config, ConnectionConfig, ProfileConfig, SecureValue, TooManyRequestsStrategy,
};
