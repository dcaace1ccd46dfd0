//! Lenient accessors over a raw JSON mapping.
//!
//! Each accessor returns `None` (or an empty collection) when the key is
//! absent, `null`, or holds a value of the wrong JSON type.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{DynatraceObject, ObjectContext, RawMap};
use crate::error::{ClientError, Result};

/// Typed reads from a [`RawMap`].
pub trait RawExt {
    /// The value at `key`, with `null` treated as absent.
    fn value(&self, key: &str) -> Option<&Value>;

    fn str(&self, key: &str) -> Option<String> {
        self.value(key).and_then(Value::as_str).map(str::to_string)
    }

    fn i64(&self, key: &str) -> Option<i64> {
        self.value(key).and_then(Value::as_i64)
    }

    fn u64(&self, key: &str) -> Option<u64> {
        self.value(key).and_then(Value::as_u64)
    }

    fn f64(&self, key: &str) -> Option<f64> {
        self.value(key).and_then(Value::as_f64)
    }

    fn bool(&self, key: &str) -> Option<bool> {
        self.value(key).and_then(Value::as_bool)
    }

    /// Epoch milliseconds (number or numeric string) or an RFC 3339 string.
    fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        match self.value(key)? {
            Value::Number(n) => n.as_i64().and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
            Value::String(s) => match s.parse::<i64>() {
                Ok(ms) => Utc.timestamp_millis_opt(ms).single(),
                Err(_) => DateTime::parse_from_rfc3339(s)
                    .ok()
                    .map(|dt| dt.with_timezone(&Utc)),
            },
            _ => None,
        }
    }

    /// A nested JSON object, cloned.
    fn object(&self, key: &str) -> Option<RawMap> {
        self.value(key).and_then(Value::as_object).cloned()
    }

    /// String elements of an array; non-strings are skipped.
    fn strings(&self, key: &str) -> Vec<String> {
        self.value(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// String-valued entries of a nested object; other values are skipped.
    fn string_map(&self, key: &str) -> BTreeMap<String, String> {
        self.value(key)
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A string-backed enumeration. Unrecognized strings map to the enum's
    /// own fallback variant.
    fn enumeration<E: DeserializeOwned>(&self, key: &str) -> Option<E> {
        self.value(key)
            .filter(|v| v.is_string())
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// An array of string-backed enumeration values; non-strings are skipped.
    fn enumerations<E: DeserializeOwned>(&self, key: &str) -> Vec<E> {
        self.value(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter(|v| v.is_string())
                    .filter_map(|v| serde_json::from_value(v.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// A nested typed object sharing `ctx`.
    fn nested<T: DynatraceObject>(&self, key: &str, ctx: &ObjectContext) -> Result<Option<T>> {
        match self.value(key) {
            Some(v @ Value::Object(_)) => T::construct(Some(v), ctx).map(Some),
            _ => Ok(None),
        }
    }

    /// A list of nested typed objects sharing `ctx`; absent gives an empty `Vec`.
    fn list<T: DynatraceObject>(&self, key: &str, ctx: &ObjectContext) -> Result<Vec<T>> {
        match self.value(key).and_then(Value::as_array) {
            Some(items) => super::construct_all(items, ctx),
            None => Ok(Vec::new()),
        }
    }

    /// A string the calling model cannot do without.
    fn require_str(&self, key: &'static str, model: &'static str) -> Result<String> {
        self.str(key)
            .ok_or(ClientError::MissingField { model, field: key })
    }
}

impl RawExt for RawMap {
    fn value(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_null())
    }
}
