//! Authenticated transport for the Dynatrace REST API.
//!
//! [`HttpClient`] is the single collaborator every other layer talks to. It
//! prefixes paths with the environment URL, attaches the `Api-Token`
//! authorization header, applies the retry policy and returns the raw
//! [`ApiResponse`] untouched for any 2xx status.
//!
//! # What this module does NOT handle:
//! - JSON-to-model mapping (see [`crate::object`])
//! - Pagination (see [`crate::pagination`])
//!
//! # Invariants
//! - Cloning an `HttpClient` is cheap and shares the connection pool
//! - The API token is never logged or formatted

pub mod builder;
mod request;
mod response;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
pub use reqwest::Method;
use secrecy::SecretString;
use serde::Serialize;
use serde_json::Value;

use dynatrace_config::TooManyRequestsStrategy;

pub use builder::HttpClientBuilder;
pub use response::ApiResponse;

use crate::error::Result;
use crate::metrics::MetricsCollector;

/// Query parameters in request order.
pub type QueryParams = Vec<(String, String)>;

/// Body of an outgoing request.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// Serialized as `application/json`.
    Json(Value),
    /// Sent as `text/plain; charset=utf-8` (metric ingestion line protocol).
    Text(String),
}

impl RequestBody {
    /// Serialize any value into a JSON body.
    pub fn json<T: Serialize>(value: &T) -> Result<Self> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }
}

/// Retry settings applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: usize,
    pub retry_delay: Duration,
    pub too_many_requests: TooManyRequestsStrategy,
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (0-based): `retry_delay * 2^attempt`.
    pub fn backoff(&self, attempt: usize) -> Duration {
        let factor = 1u32 << attempt.min(16);
        self.retry_delay.saturating_mul(factor)
    }
}

pub(crate) struct Inner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_token: SecretString,
    pub(crate) default_headers: HeaderMap,
    pub(crate) retry: RetryPolicy,
    pub(crate) metrics: Option<MetricsCollector>,
    pub(crate) log_bodies: bool,
}

/// Authenticated, retrying HTTP transport bound to one environment.
#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<Inner>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.inner.base_url)
            .field("retry", &self.inner.retry)
            .field("metrics", &self.inner.metrics.is_some())
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Start configuring a new transport.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    pub(crate) fn from_inner(inner: Inner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Environment URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Retry settings in effect.
    pub fn retry_policy(&self) -> RetryPolicy {
        self.inner.retry
    }

    pub(crate) fn metrics(&self) -> Option<&MetricsCollector> {
        self.inner.metrics.as_ref()
    }

    /// Resolve `path` against the environment URL.
    ///
    /// Absolute URLs are used unchanged.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.inner.base_url, path)
        } else {
            format!("{}/{}", self.inner.base_url, path)
        }
    }

    /// Perform one logical request, retrying per [`RetryPolicy`].
    ///
    /// `headers` are merged over the default headers for this call only.
    /// `Authorization` is always the client's own `Api-Token`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ApiError`](crate::ClientError::ApiError) for any
    /// status >= 400 once retries are spent, or
    /// [`ClientError::HttpError`](crate::ClientError::HttpError) when the
    /// request never produced a response.
    pub async fn make_request(
        &self,
        path: &str,
        params: &[(String, String)],
        headers: Option<&HeaderMap>,
        method: Method,
        body: Option<RequestBody>,
    ) -> Result<ApiResponse> {
        let url = self.url_for(path);
        let mut request = self.inner.http.request(method.clone(), &url);

        let mut merged = self.inner.default_headers.clone();
        if let Some(extra) = headers {
            for (name, value) in extra {
                merged.insert(name.clone(), value.clone());
            }
        }
        // The token always wins over caller-supplied credentials
        merged.insert(reqwest::header::AUTHORIZATION, self.authorization_header()?);
        request = request.headers(merged);

        if !params.is_empty() {
            request = request.query(params);
        }

        match body {
            Some(RequestBody::Json(value)) => {
                if self.inner.log_bodies {
                    tracing::trace!(body = %value, "request body");
                }
                request = request.json(&value);
            }
            Some(RequestBody::Text(text)) => {
                if self.inner.log_bodies {
                    tracing::trace!(body = %text, "request body");
                }
                request = request
                    .header(
                        reqwest::header::CONTENT_TYPE,
                        HeaderValue::from_static("text/plain; charset=utf-8"),
                    )
                    .body(text);
            }
            None => {}
        }

        request::send_with_retry(&self.inner, request, method.as_str(), path).await
    }

    fn authorization_header(&self) -> Result<HeaderValue> {
        use secrecy::ExposeSecret;

        let mut value = HeaderValue::from_str(&format!(
            "Api-Token {}",
            self.inner.api_token.expose_secret()
        ))
        .map_err(|_| {
            crate::error::ClientError::InvalidUrl(
                "API token contains characters not allowed in a header".to_string(),
            )
        })?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// GET `path` with query parameters.
    pub async fn get(&self, path: &str, params: &[(String, String)]) -> Result<ApiResponse> {
        self.make_request(path, params, None, Method::GET, None)
            .await
    }

    /// POST a JSON body to `path`.
    pub async fn post_json(&self, path: &str, body: Value) -> Result<ApiResponse> {
        self.make_request(path, &[], None, Method::POST, Some(RequestBody::Json(body)))
            .await
    }

    /// PUT a JSON body to `path`.
    pub async fn put_json(&self, path: &str, body: Value) -> Result<ApiResponse> {
        self.make_request(path, &[], None, Method::PUT, Some(RequestBody::Json(body)))
            .await
    }

    /// DELETE `path`.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.make_request(path, &[], None, Method::DELETE, None)
            .await
    }
}
