//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports for testing the Dynatrace client against a
//! wiremock server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here retry with a 1 ms base delay so retry tests stay fast
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)

use std::time::Duration;

use secrecy::SecretString;

#[allow(unused_imports)]
pub use dynatrace_client::testing::generators::PageGenerator;
#[allow(unused_imports)]
pub use dynatrace_client::testing::load_fixture;
#[allow(unused_imports)]
pub use dynatrace_client::{ClientError, Dynatrace, HttpClient, endpoints};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub const TEST_TOKEN: &str = "dt0c01.TESTTOKEN.SECRETPART";

/// A transport pointed at `uri` that never retries.
#[allow(dead_code)]
pub fn test_http(uri: &str) -> HttpClient {
    test_http_with_retries(uri, 0)
}

/// A transport pointed at `uri` with `max_retries` fast retries.
#[allow(dead_code)]
pub fn test_http_with_retries(uri: &str, max_retries: usize) -> HttpClient {
    HttpClient::builder()
        .base_url(uri.to_string())
        .api_token(SecretString::new(TEST_TOKEN.to_string().into()))
        .max_retries(max_retries)
        .retry_delay(Duration::from_millis(1))
        .build()
        .expect("test client should build")
}

/// A [`Dynatrace`] client pointed at `uri` that never retries.
#[allow(dead_code)]
pub fn test_client(uri: &str) -> Dynatrace {
    Dynatrace::new(test_http(uri))
}

/// Number of requests the server received for `path`.
#[allow(dead_code)]
pub async fn request_count(server: &MockServer, path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == path)
        .count()
}
