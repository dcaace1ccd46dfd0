//! Dynatrace REST API client.
//!
//! This crate provides a typed, async client for the Dynatrace environment
//! API (v2, plus the v1 topology hosts listing). Responses are mapped into
//! typed models through [`DynatraceObject`], and list endpoints return lazy
//! [`PaginatedList`] / [`HeaderPaginatedList`] sequences that fetch pages on
//! demand.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod metrics;
pub mod models;
pub mod object;
pub mod pagination;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::Dynatrace;
pub use error::{ClientError, Result};
pub use http::{ApiResponse, HttpClient, HttpClientBuilder, Method, RequestBody, RetryPolicy};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use object::{DynatraceObject, ObjectContext, RawExt, RawMap, ToRaw, construct_all};
pub use pagination::{
    BodyPages, HeaderPaginatedList, HeaderPages, PageData, PageIter, PageStrategy, Paginated,
    PaginatedList,
};
