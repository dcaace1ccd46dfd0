//! Audit log entries (`/api/v2/auditlogs`).

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;
use crate::object::{DynatraceObject, ObjectContext, RawExt, RawMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventType {
    Create,
    Delete,
    General,
    Get,
    Login,
    Logout,
    Patch,
    Post,
    Put,
    Read,
    RemoteConfigurationManagement,
    Revoke,
    TagAdd,
    TagRemove,
    TagUpdate,
    Update,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditCategory {
    Config,
    DebugUi,
    ManualTaggingService,
    Token,
    WebUi,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditLogEntry {
    pub log_id: Option<String>,
    pub event_type: Option<AuditEventType>,
    pub category: Option<AuditCategory>,
    pub entity_id: Option<String>,
    pub environment_id: Option<String>,
    pub user: Option<String>,
    pub user_type: Option<String>,
    pub user_origin: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub success: Option<bool>,
    pub message: Option<String>,
    /// JSON patch of the change, when the entry records one.
    pub patch: Option<Value>,
}

impl DynatraceObject for AuditLogEntry {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            log_id: raw.str("logId"),
            event_type: raw.enumeration("eventType"),
            category: raw.enumeration("category"),
            entity_id: raw.str("entityId"),
            environment_id: raw.str("environmentId"),
            user: raw.str("user"),
            user_type: raw.str("userType"),
            user_origin: raw.str("userOrigin"),
            timestamp: raw.timestamp("timestamp"),
            success: raw.bool("success"),
            message: raw.str("message"),
            patch: raw.value("patch").cloned(),
        })
    }
}
