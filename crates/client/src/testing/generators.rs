//! Generators for paginated response bodies.
//!
//! [`PageGenerator`] produces the bodies of a v2 listing split into pages,
//! each carrying a `nextPageKey` except the last. Items are numbered
//! objects (`{"id": "item-0", "index": 0}`) so tests can check order.

use serde_json::{Map, Value, json};

/// Builder for the page bodies of one body-paginated listing.
#[derive(Debug, Clone)]
pub struct PageGenerator {
    list_item: String,
    total: Option<usize>,
    total_on_every_page: bool,
    key_prefix: String,
}

impl PageGenerator {
    /// Pages carrying items under `list_item`.
    pub fn new(list_item: &str) -> Self {
        Self {
            list_item: list_item.to_string(),
            total: None,
            total_on_every_page: false,
            key_prefix: "page-key".to_string(),
        }
    }

    /// Report `total` as `totalCount` on the first page.
    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    /// Report the total on every page instead of only the first.
    pub fn total_on_every_page(mut self) -> Self {
        self.total_on_every_page = true;
        self
    }

    /// Prefix of the generated continuation keys (`{prefix}-1`, `{prefix}-2`, ...).
    pub fn with_key_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// The continuation key that requests page `page` (1-based, page 0 has none).
    pub fn key_for(&self, page: usize) -> String {
        format!("{}-{}", self.key_prefix, page)
    }

    /// One body per entry of `sizes`, with consecutively numbered items.
    pub fn pages(&self, sizes: &[usize]) -> Vec<Value> {
        let mut next_index = 0;
        let mut bodies = Vec::with_capacity(sizes.len());

        for (page, &size) in sizes.iter().enumerate() {
            let items: Vec<Value> = (next_index..next_index + size).map(item).collect();
            next_index += size;

            let mut body = Map::new();
            body.insert(self.list_item.clone(), Value::Array(items));
            if let Some(total) = self.total
                && (page == 0 || self.total_on_every_page)
            {
                body.insert("totalCount".to_string(), json!(total));
            }
            if page + 1 < sizes.len() {
                body.insert("nextPageKey".to_string(), json!(self.key_for(page + 1)));
            }
            bodies.push(Value::Object(body));
        }

        bodies
    }
}

/// The numbered item at `index`.
pub fn item(index: usize) -> Value {
    json!({ "id": format!("item-{index}"), "index": index })
}

/// Wrap proptest strategies for arbitrary raw payloads.
#[cfg(feature = "test-utils")]
pub mod proptest_strategies {
    use proptest::prelude::*;
    use serde_json::{Map, Value};

    /// Arbitrary JSON values up to a small nesting depth.
    pub fn json_value_strategy() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            any::<f64>()
                .prop_filter("finite", |f| f.is_finite())
                .prop_map(Value::from),
            ".{0,12}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-zA-Z]{1,12}", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    /// Objects mixing well-known Dynatrace keys with arbitrary values,
    /// so typed accessors see wrong-typed inputs.
    pub fn raw_object_strategy() -> impl Strategy<Value = Map<String, Value>> {
        let key = prop_oneof![
            Just("entityId".to_string()),
            Just("displayName".to_string()),
            Just("startTime".to_string()),
            Just("endTime".to_string()),
            Just("status".to_string()),
            Just("tags".to_string()),
            Just("properties".to_string()),
            Just("managementZones".to_string()),
            Just("fromRelationships".to_string()),
            Just("value".to_string()),
            Just("error".to_string()),
            "[a-zA-Z]{1,12}",
        ];
        prop::collection::btree_map(key, json_value_strategy(), 0..10)
            .prop_map(|m| m.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_carry_keys_except_last() {
        let pages = PageGenerator::new("entities").with_total(5).pages(&[2, 2, 1]);

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0]["nextPageKey"], "page-key-1");
        assert_eq!(pages[0]["totalCount"], 5);
        assert!(pages[1].get("totalCount").is_none());
        assert!(pages[2].get("nextPageKey").is_none());
        assert_eq!(pages[2]["entities"][0]["index"], 4);
    }
}
