//! Audit logs API v2.

use crate::endpoints::{decode, encode_path_segment};
use crate::error::Result;
use crate::http::{HttpClient, QueryParams};
use crate::models::AuditLogEntry;
use crate::pagination::PaginatedList;

#[derive(Debug, Clone, Default)]
pub struct AuditLogListOptions {
    /// e.g. `category("CONFIG")`
    pub filter: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub sort: Option<String>,
    pub page_size: Option<usize>,
}

pub fn list_audit_logs(http: &HttpClient, options: &AuditLogListOptions) -> PaginatedList<AuditLogEntry> {
    let mut params: QueryParams = vec![];
    crate::query_params! { params =>
        "filter" => ref options.filter,
        "from" => ref options.from,
        "to" => ref options.to,
        "sort" => ref options.sort,
        "pageSize" => options.page_size,
    }
    PaginatedList::new(http.clone(), "/api/v2/auditlogs", Some(params), None, "auditLogs")
}

pub async fn get_audit_log(http: &HttpClient, log_id: &str) -> Result<AuditLogEntry> {
    let path = format!("/api/v2/auditlogs/{}", encode_path_segment(log_id));
    let response = http.get(&path, &[]).await?;
    decode(http, &response)
}
