use serde_json::Value;

use dynatrace_config::constants::{NEXT_PAGE_KEY_HEADER, TOTAL_COUNT_HEADER};

use super::{PageData, PageStrategy, non_empty};
use crate::error::Result;
use crate::http::ApiResponse;

/// Page layout of the v1 topology API: a bare JSON array, with the cursor in
/// `Next-Page-Key` and the total in `Total-Count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderPages;

impl PageStrategy for HeaderPages {
    fn parse(&self, response: &ApiResponse) -> Result<PageData> {
        let total_count = response
            .header(TOTAL_COUNT_HEADER)
            .and_then(|v| v.trim().parse::<usize>().ok());

        let items = match response.json()? {
            Value::Array(items) => items,
            _ => {
                return Ok(PageData {
                    total_count,
                    ..PageData::default()
                });
            }
        };

        Ok(PageData {
            items,
            next_page_key: non_empty(response.header(NEXT_PAGE_KEY_HEADER)),
            total_count,
        })
    }
}
