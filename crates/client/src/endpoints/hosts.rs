//! Topology API v1 hosts. Pages are bare arrays with the cursor in headers.

use crate::http::{HttpClient, QueryParams};
use crate::models::Host;
use crate::pagination::HeaderPaginatedList;

#[derive(Debug, Clone, Default)]
pub struct HostListOptions {
    /// Each tag is sent as its own `tag` parameter; hosts must carry all of them.
    pub tags: Vec<String>,
    /// Restrict to these entity IDs.
    pub entities: Vec<String>,
    pub management_zone: Option<String>,
    pub host_group_id: Option<String>,
    pub start_timestamp: Option<i64>,
    pub end_timestamp: Option<i64>,
    /// e.g. `hour`, `day`
    pub relative_time: Option<String>,
    pub include_details: Option<bool>,
    pub page_size: Option<usize>,
}

pub fn list_hosts(http: &HttpClient, options: &HostListOptions) -> HeaderPaginatedList<Host> {
    let mut params: QueryParams = vec![];
    for tag in &options.tags {
        params.push(("tag".to_string(), tag.clone()));
    }
    for entity in &options.entities {
        params.push(("entity".to_string(), entity.clone()));
    }
    crate::query_params! { params =>
        "managementZone" => ref options.management_zone,
        "hostGroupId" => ref options.host_group_id,
        "startTimestamp" => options.start_timestamp,
        "endTimestamp" => options.end_timestamp,
        "relativeTime" => ref options.relative_time,
        "includeDetails" => options.include_details,
        "pageSize" => options.page_size,
    }
    HeaderPaginatedList::new(
        http.clone(),
        "/api/v1/entity/infrastructure/hosts",
        Some(params),
        None,
    )
}
