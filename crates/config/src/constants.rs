//! Centralized constants for the Dynatrace client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Retry Defaults
// =============================================================================

/// Default maximum number of retries for failed requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for the retry count.
pub const MAX_MAX_RETRIES: usize = 10;

/// Default base delay between retries in milliseconds.
///
/// The n-th retry waits `delay * 2^n`.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// HTTP status codes that trigger a retry.
/// Longest a 429 under the wait strategy may sleep before retrying.
pub const MAX_RATE_LIMIT_WAIT_SECS: u64 = 300;

pub const RETRY_STATUS_CODES: &[u16] = &[429, 500, 502, 503, 504];

// =============================================================================
// API Conventions
// =============================================================================

/// Query parameter carrying the continuation token for the next page.
pub const NEXT_PAGE_KEY_PARAM: &str = "nextPageKey";

/// Response header carrying the continuation token on v1 endpoints.
pub const NEXT_PAGE_KEY_HEADER: &str = "next-page-key";

/// Response header carrying the total item count on v1 endpoints.
pub const TOTAL_COUNT_HEADER: &str = "total-count";

/// Name of the application directory used for the profile file.
pub const APP_DIR_NAME: &str = "dynatrace-client";
