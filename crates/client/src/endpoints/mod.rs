//! REST API endpoint implementations.
//!
//! Each function takes the shared [`HttpClient`] and returns typed models.
//! List functions return a lazy [`PaginatedList`](crate::PaginatedList) or
//! [`HeaderPaginatedList`](crate::HeaderPaginatedList) and perform no I/O
//! until the sequence is consumed.

mod audit_logs;
mod entities;
mod events;
mod extensions;
mod hosts;
mod metrics;
mod problems;
pub mod query_params;
mod settings;
mod tokens;
pub mod url_encoding;

pub use audit_logs::{AuditLogListOptions, get_audit_log, list_audit_logs};
pub use entities::{EntityListOptions, get_entity, list_entities, list_entity_types};
pub use events::{EventListOptions, get_event, ingest_event, list_events};
pub use extensions::{
    delete_extension, get_extension, list_extension_versions, list_extensions,
};
pub use hosts::{HostListOptions, list_hosts};
pub use metrics::{
    MetricListOptions, MetricQuery, delete_metric, get_metric, ingest_metrics, list_metrics,
    query_metrics,
};
pub use problems::{ProblemListOptions, close_problem, get_problem, list_problems};
pub use settings::{
    SettingsListOptions, create_settings_objects, delete_settings_object, get_settings_object,
    list_settings_objects, update_settings_object,
};
pub use tokens::{
    TokenListOptions, create_token, delete_token, get_token, list_tokens, lookup_token,
};
pub use url_encoding::encode_path_segment;

use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::http::{ApiResponse, HttpClient};
use crate::object::{DynatraceObject, ObjectContext, construct_all};

/// Context for objects built from `response`: the same transport, plus the
/// response headers.
fn response_context(http: &HttpClient, response: &ApiResponse) -> ObjectContext {
    ObjectContext::new(http.clone()).with_headers(response.headers.clone())
}

/// Decode a single-object response body into `T`.
fn decode<T: DynatraceObject>(http: &HttpClient, response: &ApiResponse) -> Result<T> {
    let ctx = response_context(http, response);
    T::construct(Some(&response.json()?), &ctx)
}

/// Decode a top-level JSON array into `Vec<T>`.
fn decode_array<T: DynatraceObject>(http: &HttpClient, response: &ApiResponse) -> Result<Vec<T>> {
    let ctx = response_context(http, response);
    match response.json()? {
        Value::Array(items) => construct_all(&items, &ctx),
        other => Err(ClientError::InvalidResponse(format!(
            "{} returned {} where an array was expected",
            response.url,
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
