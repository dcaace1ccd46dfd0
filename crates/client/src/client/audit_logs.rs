//! Audit log API methods for [`Dynatrace`].

use crate::client::Dynatrace;
use crate::endpoints::{self, AuditLogListOptions};
use crate::error::Result;
use crate::models::AuditLogEntry;
use crate::pagination::PaginatedList;

impl Dynatrace {
    pub fn list_audit_logs(&self, options: &AuditLogListOptions) -> PaginatedList<AuditLogEntry> {
        endpoints::list_audit_logs(&self.http, options)
    }

    pub async fn get_audit_log(&self, log_id: &str) -> Result<AuditLogEntry> {
        endpoints::get_audit_log(&self.http, log_id).await
    }
}
