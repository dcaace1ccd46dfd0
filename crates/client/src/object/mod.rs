//! Raw-to-typed object mapping.
//!
//! Every typed resource implements [`DynatraceObject`]: given a raw JSON
//! mapping and an [`ObjectContext`], populate typed fields. Request bodies
//! implement [`ToRaw`] to go the other way.
//!
//! # Invariants
//! - Construction performs no I/O.
//! - An absent or non-object raw value is treated as the empty mapping.
//! - Missing keys and keys holding the wrong JSON type resolve to `None`
//!   (or an empty `Vec` for lists). Only a model's own `from_raw` may fail,
//!   and only with [`ClientError::MissingField`].
//! - Nested objects receive the same context, so they can issue follow-up
//!   requests on the same transport.

mod raw;

use std::fmt;

use reqwest::header::HeaderMap;
use serde::Serialize;
use serde_json::{Map, Value};

pub use raw::RawExt;

use crate::error::{ClientError, Result};
use crate::http::HttpClient;

/// A JSON object prior to typed-field extraction.
pub type RawMap = Map<String, Value>;

/// Transport handle and response headers handed to every constructed object.
#[derive(Clone, Default)]
pub struct ObjectContext {
    http: Option<HttpClient>,
    headers: Option<HeaderMap>,
}

impl fmt::Debug for ObjectContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectContext")
            .field("attached", &self.http.is_some())
            .field("headers", &self.headers.as_ref().map(HeaderMap::len))
            .finish()
    }
}

impl ObjectContext {
    /// Context bound to a transport.
    pub fn new(http: HttpClient) -> Self {
        Self {
            http: Some(http),
            headers: None,
        }
    }

    /// Context with no transport; follow-up operations fail with
    /// [`ClientError::Detached`].
    pub fn detached() -> Self {
        Self::default()
    }

    /// Attach the headers of the response the object came from.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn http(&self) -> Option<&HttpClient> {
        self.http.as_ref()
    }

    pub fn headers(&self) -> Option<&HeaderMap> {
        self.headers.as_ref()
    }

    /// The transport, or [`ClientError::Detached`] naming `model`.
    pub fn require_http(&self, model: &'static str) -> Result<&HttpClient> {
        self.http.as_ref().ok_or(ClientError::Detached(model))
    }
}

/// A typed resource that can populate itself from a raw mapping.
pub trait DynatraceObject: Sized {
    /// Populate typed fields from `raw`.
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self>;

    /// Construct from an optional JSON value.
    ///
    /// `None` and non-object values are treated as the empty mapping.
    fn construct(raw: Option<&Value>, ctx: &ObjectContext) -> Result<Self> {
        match raw {
            Some(Value::Object(map)) => Self::from_raw(map, ctx),
            _ => Self::from_raw(&RawMap::new(), ctx),
        }
    }
}

/// The raw mapping itself, for schemaless payloads such as settings values.
impl DynatraceObject for RawMap {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(raw.clone())
    }
}

/// A request model that serializes back to a raw mapping.
///
/// `construct(Some(&Value::Object(x.to_raw()?)))` reproduces `x` field for field.
pub trait ToRaw: Serialize {
    fn to_raw(&self) -> Result<RawMap> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(ClientError::InvalidResponse(format!(
                "expected a JSON object, serialized to {other}"
            ))),
        }
    }
}

/// Construct one object per element of `values`. Non-object elements
/// become empty objects.
pub fn construct_all<T: DynatraceObject>(values: &[Value], ctx: &ObjectContext) -> Result<Vec<T>> {
    values.iter().map(|v| T::construct(Some(v), ctx)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Named {
        name: Option<String>,
        attached: bool,
    }

    impl DynatraceObject for Named {
        fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
            Ok(Self {
                name: raw.str("name"),
                attached: ctx.http().is_some(),
            })
        }
    }

    #[test]
    fn test_construct_absent_is_empty() {
        let named = Named::construct(None, &ObjectContext::detached()).unwrap();
        assert_eq!(
            named,
            Named {
                name: None,
                attached: false
            }
        );
    }

    #[test]
    fn test_construct_non_object_is_empty() {
        let named = Named::construct(Some(&json!([1, 2])), &ObjectContext::detached()).unwrap();
        assert_eq!(named.name, None);
    }

    #[test]
    fn test_construct_all_preserves_order() {
        let values = vec![json!({"name": "a"}), json!("junk"), json!({"name": "c"})];
        let items: Vec<Named> = construct_all(&values, &ObjectContext::detached()).unwrap();
        let names: Vec<_> = items.into_iter().map(|n| n.name).collect();
        assert_eq!(names, vec![Some("a".into()), None, Some("c".into())]);
    }

    #[test]
    fn test_detached_context_refuses_follow_ups() {
        let ctx = ObjectContext::detached();
        assert!(matches!(
            ctx.require_http("ApiToken"),
            Err(ClientError::Detached("ApiToken"))
        ));
    }
}
