//! Retry loop for HTTP requests with exponential backoff.
//!
//! Every request is attempted once plus up to `max_retries` more times when
//! the status is in `RETRY_STATUS_CODES` or the connection failed or timed
//! out. The n-th retry waits `retry_delay * 2^n`, except that a 429 under
//! [`TooManyRequestsStrategy::Wait`] sleeps until the advertised reset.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use reqwest::RequestBuilder;
use reqwest::header::HeaderMap;
use tracing::debug;

use dynatrace_config::TooManyRequestsStrategy;
use dynatrace_config::constants::MAX_RATE_LIMIT_WAIT_SECS;

use super::Inner;
use super::response::{ApiResponse, error_message};
use crate::error::{ClientError, Result};

/// Sleep requested by the server for a 429, if it told us.
///
/// `X-RateLimit-Reset` carries the reset instant in epoch microseconds;
/// `Retry-After` carries seconds. Either is capped at
/// [`MAX_RATE_LIMIT_WAIT_SECS`].
pub(crate) fn rate_limit_delay(headers: &HeaderMap) -> Option<Duration> {
    let text = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    let requested = if let Some(reset_us) =
        text("x-ratelimit-reset").and_then(|v| v.trim().parse::<u64>().ok())
    {
        let now_us = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        Duration::from_micros(reset_us.saturating_sub(now_us))
    } else {
        text("retry-after")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs)?
    };

    let cap = Duration::from_secs(MAX_RATE_LIMIT_WAIT_SECS);
    if requested > cap {
        debug!(
            requested_secs = requested.as_secs(),
            cap_secs = MAX_RATE_LIMIT_WAIT_SECS,
            "Rate limit wait capped"
        );
        return Some(cap);
    }
    Some(requested)
}

/// Send `builder`, retrying per the client's policy.
///
/// Returns the first 2xx response, or the last error once attempts are spent.
pub(crate) async fn send_with_retry(
    inner: &Inner,
    builder: RequestBuilder,
    method: &str,
    endpoint: &str,
) -> Result<ApiResponse> {
    let policy = inner.retry;
    let metrics = inner.metrics.as_ref();

    for attempt in 0..=policy.max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                debug!("Request builder cannot be cloned, single attempt only");
                return finish(inner, builder.send().await, method, endpoint, Instant::now())
                    .await
                    .map_err(|(e, _)| e);
            }
        };

        if let Some(m) = metrics {
            m.record_request(endpoint, method);
        }
        let started = Instant::now();
        let outcome = finish(inner, attempt_builder.send().await, method, endpoint, started).await;

        let (error, headers) = match outcome {
            Ok(response) => {
                if attempt > 0 {
                    debug!(attempt = attempt + 1, "Request succeeded after retry");
                }
                return Ok(response);
            }
            Err(failure) => failure,
        };

        if !error.is_retryable() || attempt == policy.max_retries {
            if let Some(m) = metrics {
                m.record_client_error(endpoint, method, &error);
            }
            if attempt > 0 {
                debug!(attempts = attempt + 1, error = %error, "Retries exhausted");
            }
            return Err(error);
        }

        let delay = match (error.status(), policy.too_many_requests, headers) {
            (Some(429), TooManyRequestsStrategy::Wait, Some(h)) => {
                rate_limit_delay(&h).unwrap_or_else(|| policy.backoff(attempt))
            }
            _ => policy.backoff(attempt),
        };

        debug!(
            attempt = attempt + 1,
            max_retries = policy.max_retries,
            status = ?error.status(),
            delay_ms = delay.as_millis() as u64,
            "Retrying request"
        );
        if let Some(m) = metrics {
            m.record_retry(endpoint, method, attempt + 1);
        }
        tokio::time::sleep(delay).await;
    }

    // The final iteration always returns
    Err(ClientError::InvalidResponse(format!(
        "no attempt was made for {method} {endpoint}"
    )))
}

/// Turn a raw send result into an [`ApiResponse`] or an error plus the
/// response headers (needed for rate-limit handling).
async fn finish(
    inner: &Inner,
    sent: std::result::Result<reqwest::Response, reqwest::Error>,
    method: &str,
    endpoint: &str,
    started: Instant,
) -> std::result::Result<ApiResponse, (ClientError, Option<HeaderMap>)> {
    let response = match sent {
        Ok(response) => response,
        Err(e) => {
            if let Some(m) = &inner.metrics {
                m.record_request_duration(endpoint, method, started.elapsed(), None);
            }
            debug!(method, endpoint, error = %e, "Request failed before a response");
            return Err((ClientError::HttpError(e), None));
        }
    };

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let headers = response.headers().clone();
    let body = response
        .text()
        .await
        .map_err(|e| (ClientError::HttpError(e), Some(headers.clone())))?;

    if let Some(m) = &inner.metrics {
        m.record_request_duration(endpoint, method, started.elapsed(), Some(status));
    }
    debug!(method, %url, status, elapsed_ms = started.elapsed().as_millis() as u64, "HTTP response");
    if inner.log_bodies {
        tracing::trace!(%url, body = %body, "response body");
    }

    if (200..300).contains(&status) {
        Ok(ApiResponse {
            status,
            url,
            headers,
            body,
        })
    } else {
        Err((
            ClientError::ApiError {
                status,
                url,
                message: error_message(&body),
            },
            Some(headers),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_rate_limit_delay_from_retry_after() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("3"));
        assert_eq!(rate_limit_delay(&headers), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_rate_limit_reset_in_past_is_zero() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("1000"));
        headers.insert("retry-after", HeaderValue::from_static("30"));
        assert_eq!(rate_limit_delay(&headers), Some(Duration::ZERO));
    }

    #[test]
    fn test_far_future_rate_limit_reset_is_capped() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-ratelimit-reset",
            HeaderValue::from_static("99999999999999999"),
        );
        assert_eq!(
            rate_limit_delay(&headers),
            Some(Duration::from_secs(MAX_RATE_LIMIT_WAIT_SECS))
        );
    }

    #[test]
    fn test_large_retry_after_is_capped() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("86400"));
        assert_eq!(
            rate_limit_delay(&headers),
            Some(Duration::from_secs(MAX_RATE_LIMIT_WAIT_SECS))
        );
    }

    #[test]
    fn test_rate_limit_delay_absent() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("soon"));
        assert_eq!(rate_limit_delay(&headers), None);
    }
}
