//! Integration tests for configuration loading.
//!
//! These tests verify the end-to-end `ConfigLoader` chain: profile file,
//! environment variables and explicit overrides.

use dynatrace_config::{ConfigError, ConfigLoader, TooManyRequestsStrategy, env_var_or_none};
use secrecy::ExposeSecret;
use serial_test::serial;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

const PROFILE_ENV_VARS: [&str; 4] = [
    "DYNATRACE_BASE_URL",
    "DYNATRACE_API_TOKEN",
    "DYNATRACE_PROFILE",
    "DYNATRACE_CONFIG_PATH",
];

fn profile_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "profiles": {{
                "prod": {{
                    "base_url": "https://prod.live.dynatrace.com/",
                    "api_token": "dt0c01.profile",
                    "timeout_seconds": 90,
                    "max_retries": 4,
                    "too_many_requests_strategy": "wait"
                }},
                "partial": {{
                    "base_url": "https://partial.live.dynatrace.com"
                }}
            }}
        }}"#
    )
    .unwrap();
    file
}

fn without_profile_env<F: FnOnce()>(f: F) {
    temp_env::with_vars_unset(PROFILE_ENV_VARS, f);
}

#[test]
#[serial]
fn test_loads_profile_from_file() {
    let file = profile_file();

    without_profile_env(|| {
        let config = ConfigLoader::new()
            .with_config_path(file.path().to_path_buf())
            .with_profile_name("prod".to_string())
            .from_profile()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.connection.base_url, "https://prod.live.dynatrace.com");
        assert_eq!(config.auth.api_token.expose_secret(), "dt0c01.profile");
        assert_eq!(config.connection.timeout, Duration::from_secs(90));
        assert_eq!(config.connection.max_retries, 4);
        assert_eq!(
            config.connection.too_many_requests_strategy,
            TooManyRequestsStrategy::Wait
        );
    });
}

#[test]
#[serial]
fn test_env_overrides_profile() {
    let file = profile_file();

    temp_env::with_vars(
        [
            ("DYNATRACE_BASE_URL", Some("https://env.live.dynatrace.com")),
            ("DYNATRACE_API_TOKEN", None),
            ("DYNATRACE_PROFILE", None),
            ("DYNATRACE_CONFIG_PATH", None),
        ],
        || {
            let config = ConfigLoader::new()
                .with_config_path(file.path().to_path_buf())
                .with_profile_name("prod".to_string())
                .from_profile()
                .unwrap()
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.connection.base_url, "https://env.live.dynatrace.com");
            // Token still comes from the profile
            assert_eq!(config.auth.api_token.expose_secret(), "dt0c01.profile");
        },
    );
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    temp_env::with_vars(
        [
            ("DYNATRACE_BASE_URL", Some("https://env.live.dynatrace.com")),
            ("DYNATRACE_API_TOKEN", Some("dt0c01.env")),
        ],
        || {
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .with_base_url("https://cli.live.dynatrace.com".to_string())
                .build()
                .unwrap();

            assert_eq!(config.connection.base_url, "https://cli.live.dynatrace.com");
            assert_eq!(config.auth.api_token.expose_secret(), "dt0c01.env");
        },
    );
}

#[test]
#[serial]
fn test_partial_profile_without_token_fails() {
    let file = profile_file();

    without_profile_env(|| {
        let result = ConfigLoader::new()
            .with_config_path(file.path().to_path_buf())
            .with_profile_name("partial".to_string())
            .from_profile()
            .unwrap()
            .build();

        assert!(matches!(result, Err(ConfigError::MissingApiToken)));
    });
}

#[test]
#[serial]
fn test_unknown_profile_reports_profile_not_found() {
    let file = profile_file();

    without_profile_env(|| {
        let result = ConfigLoader::new()
            .with_config_path(file.path().to_path_buf())
            .with_profile_name("staging".to_string())
            .from_profile()
            .unwrap()
            .build();

        assert!(matches!(result, Err(ConfigError::ProfileNotFound(ref p)) if p == "staging"));
    });
}

#[test]
#[serial]
fn test_profile_file_path_from_env() {
    let file = profile_file();
    let path = file.path().to_string_lossy().to_string();

    temp_env::with_vars(
        [
            ("DYNATRACE_BASE_URL", None),
            ("DYNATRACE_API_TOKEN", None),
            ("DYNATRACE_PROFILE", Some("prod")),
            ("DYNATRACE_CONFIG_PATH", Some(path.as_str())),
        ],
        || {
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .from_profile()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.connection.base_url, "https://prod.live.dynatrace.com");
        },
    );
}

#[test]
#[serial]
fn test_corrupt_profile_file_is_reported_without_content() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"profiles": {{"prod": "dt0c01.SECRET"#).unwrap();

    without_profile_env(|| {
        let result = ConfigLoader::new()
            .with_config_path(file.path().to_path_buf())
            .with_profile_name("prod".to_string())
            .from_profile();

        let err = result.err().expect("parse should fail");
        assert!(matches!(err, ConfigError::ConfigFileParse { .. }));
        assert!(!err.to_string().contains("dt0c01.SECRET"));
    });
}

#[test]
fn test_env_var_or_none_exported() {
    let _result: Option<String> = env_var_or_none("DYNATRACE_BASE_URL");
}
