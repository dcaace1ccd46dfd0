use serde_json::Value;

use super::{PageData, PageStrategy, non_empty};
use crate::error::Result;
use crate::http::ApiResponse;

/// Page layout of the v2 API: `{"totalCount": n, "nextPageKey": k, "<list_item>": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyPages {
    list_item: String,
}

impl BodyPages {
    pub fn new(list_item: impl Into<String>) -> Self {
        Self {
            list_item: list_item.into(),
        }
    }

    pub fn list_item(&self) -> &str {
        &self.list_item
    }
}

impl PageStrategy for BodyPages {
    fn parse(&self, response: &ApiResponse) -> Result<PageData> {
        let body = response.json()?;

        // A page without the list field ends the sequence
        let Some(items) = body.get(&self.list_item).and_then(Value::as_array) else {
            return Ok(PageData {
                total_count: total_count(&body),
                ..PageData::default()
            });
        };

        Ok(PageData {
            items: items.clone(),
            next_page_key: non_empty(body.get("nextPageKey").and_then(Value::as_str)),
            total_count: total_count(&body),
        })
    }
}

fn total_count(body: &Value) -> Option<usize> {
    body.get("totalCount")
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
}
