//! Builder for constructing [`HttpClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for transport configuration
//! - Validating required configuration (base_url, api_token)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying reqwest client (timeouts, TLS verification, proxy)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`HttpClient::make_request`])
//! - Retry logic for failed requests (handled by `request.rs`)
//!
//! # Invariants
//! - `base_url` and `api_token` are required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use secrecy::SecretString;

use dynatrace_config::{
    Config, TooManyRequestsStrategy,
    constants::{
        DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_MS, DEFAULT_TIMEOUT_SECS,
    },
};

use super::{HttpClient, Inner, RetryPolicy};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Builder for creating a new [`HttpClient`].
///
/// # Example
///
/// ```rust,ignore
/// use dynatrace_client::HttpClient;
/// use secrecy::SecretString;
///
/// let http = HttpClient::builder()
///     .base_url("https://abc12345.live.dynatrace.com".to_string())
///     .api_token(SecretString::new("dt0c01.XXXX".to_string().into()))
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct HttpClientBuilder {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
    retry_delay: Duration,
    too_many_requests: TooManyRequestsStrategy,
    proxy: Option<String>,
    headers: HeaderMap,
    metrics: Option<MetricsCollector>,
    log_bodies: bool,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_token: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            too_many_requests: TooManyRequestsStrategy::default(),
            proxy: None,
            headers: HeaderMap::new(),
            metrics: None,
            log_bodies: false,
        }
    }
}

impl HttpClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the environment URL, e.g. `https://abc12345.live.dynatrace.com`.
    ///
    /// Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API token sent as `Authorization: Api-Token <token>`.
    pub fn api_token(mut self, token: SecretString) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against Managed clusters with self-signed certificates
    /// in test environments.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the per-request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries after the first attempt. Default is 3.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base backoff delay. Retry `n` waits `delay * 2^n`.
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Set how HTTP 429 responses are handled.
    pub fn too_many_requests_strategy(mut self, strategy: TooManyRequestsStrategy) -> Self {
        self.too_many_requests = strategy;
        self
    }

    /// Route all requests through an HTTP(S) proxy.
    pub fn proxy(mut self, proxy: String) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Add a header sent with every request.
    pub fn default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach a metrics collector for request latency, retries and errors.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Log request and response bodies at trace level.
    pub fn log_bodies(mut self, enabled: bool) -> Self {
        self.log_bodies = enabled;
        self
    }

    /// Create a builder pre-populated from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        let connection = &config.connection;
        self.base_url = Some(connection.base_url.clone());
        self.api_token = Some(config.auth.api_token.clone());
        self.skip_verify = connection.skip_verify;
        self.timeout = connection.timeout;
        self.max_retries = connection.max_retries;
        self.retry_delay = Duration::from_millis(connection.retry_delay_ms);
        self.too_many_requests = connection.too_many_requests_strategy;
        self.proxy = connection.proxy.clone();
        self.log_bodies = connection.log_bodies;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`HttpClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` or `api_token` was not
    /// provided or the proxy URL is malformed, and `ClientError::HttpError` if
    /// the reqwest client fails to build.
    pub fn build(self) -> Result<HttpClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let api_token = self
            .api_token
            .ok_or_else(|| ClientError::InvalidUrl("api_token is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                tracing::warn!("TLS certificate verification disabled");
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        if let Some(proxy) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| ClientError::InvalidUrl(format!("invalid proxy: {e}")))?;
            http_builder = http_builder.proxy(proxy);
        }

        let mut headers = self.headers;
        headers
            .entry(ACCEPT)
            .or_insert(HeaderValue::from_static("application/json; charset=utf-8"));
        headers.entry(USER_AGENT).or_insert(HeaderValue::from_static(concat!(
            "dynatrace-client/",
            env!("CARGO_PKG_VERSION")
        )));

        let http = http_builder.build()?;

        Ok(HttpClient::from_inner(Inner {
            http,
            base_url,
            api_token,
            default_headers: headers,
            retry: RetryPolicy {
                max_retries: self.max_retries,
                retry_delay: self.retry_delay,
                too_many_requests: self.too_many_requests,
            },
            metrics: self.metrics,
            log_bodies: self.log_bodies,
        }))
    }
}
