//! Events API v2.

use crate::endpoints::{decode, encode_path_segment};
use crate::error::Result;
use crate::http::{HttpClient, QueryParams};
use crate::models::{Event, EventIngest, EventIngestResults};
use crate::object::ToRaw;
use crate::pagination::PaginatedList;

#[derive(Debug, Clone, Default)]
pub struct EventListOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    /// e.g. `eventType("CUSTOM_INFO")`
    pub event_selector: Option<String>,
    pub entity_selector: Option<String>,
    pub page_size: Option<usize>,
}

pub fn list_events(http: &HttpClient, options: &EventListOptions) -> PaginatedList<Event> {
    let mut params: QueryParams = vec![];
    crate::query_params! { params =>
        "from" => ref options.from,
        "to" => ref options.to,
        "eventSelector" => ref options.event_selector,
        "entitySelector" => ref options.entity_selector,
        "pageSize" => options.page_size,
    }
    PaginatedList::new(http.clone(), "/api/v2/events", Some(params), None, "events")
}

pub async fn get_event(http: &HttpClient, event_id: &str) -> Result<Event> {
    let path = format!("/api/v2/events/{}", encode_path_segment(event_id));
    let response = http.get(&path, &[]).await?;
    decode(http, &response)
}

/// Ingest a custom event. The result reports one entry per affected entity.
pub async fn ingest_event(http: &HttpClient, event: &EventIngest) -> Result<EventIngestResults> {
    let body = serde_json::Value::Object(event.to_raw()?);
    let response = http.post_json("/api/v2/events/ingest", body).await?;
    decode(http, &response)
}
