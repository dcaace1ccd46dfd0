//! Events and event ingestion (`/api/v2/events`).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{EntityStub, ManagementZone, MeTag};
use crate::error::Result;
use crate::object::{DynatraceObject, ObjectContext, RawExt, RawMap, ToRaw};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Open,
    Closed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventProperty {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl DynatraceObject for EventProperty {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            key: raw.str("key"),
            value: raw.str("value"),
        })
    }
}

/// A recorded event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    pub event_id: Option<String>,
    pub event_type: Option<String>,
    pub title: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub entity_id: Option<EntityStub>,
    pub properties: Vec<EventProperty>,
    pub status: Option<EventStatus>,
    pub correlation_id: Option<String>,
    pub under_maintenance: Option<bool>,
    pub suppress_alert: Option<bool>,
    pub suppress_problem: Option<bool>,
    pub frequent_event: Option<bool>,
    pub management_zones: Vec<ManagementZone>,
    pub entity_tags: Vec<MeTag>,
}

impl DynatraceObject for Event {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            event_id: raw.str("eventId"),
            event_type: raw.str("eventType"),
            title: raw.str("title"),
            start_time: raw.timestamp("startTime"),
            end_time: raw.timestamp("endTime"),
            entity_id: raw.nested("entityId", ctx)?,
            properties: raw.list("properties", ctx)?,
            status: raw.enumeration("status"),
            correlation_id: raw.str("correlationId"),
            under_maintenance: raw.bool("underMaintenance"),
            suppress_alert: raw.bool("suppressAlert"),
            suppress_problem: raw.bool("suppressProblem"),
            frequent_event: raw.bool("frequentEvent"),
            management_zones: raw.list("managementZones", ctx)?,
            entity_tags: raw.list("entityTags", ctx)?,
        })
    }
}

/// Body of `POST /api/v2/events/ingest`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventIngest {
    /// e.g. `CUSTOM_INFO`, `CUSTOM_DEPLOYMENT`, `AVAILABILITY_EVENT`.
    pub event_type: String,
    pub title: String,
    /// Epoch milliseconds; see [`EventIngest::starting_at`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// Epoch milliseconds; see [`EventIngest::ending_at`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    /// Minutes the event stays open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_selector: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl EventIngest {
    /// Set the start time. Sub-millisecond precision is dropped.
    pub fn starting_at(mut self, at: DateTime<Utc>) -> Self {
        self.start_time = Some(at.timestamp_millis());
        self
    }

    /// Set the end time. Sub-millisecond precision is dropped.
    pub fn ending_at(mut self, at: DateTime<Utc>) -> Self {
        self.end_time = Some(at.timestamp_millis());
        self
    }
}

impl ToRaw for EventIngest {}

impl DynatraceObject for EventIngest {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            event_type: raw.str("eventType").unwrap_or_default(),
            title: raw.str("title").unwrap_or_default(),
            start_time: raw.i64("startTime"),
            end_time: raw.i64("endTime"),
            timeout: raw.i64("timeout"),
            entity_selector: raw.str("entitySelector"),
            properties: raw.string_map("properties"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventIngestResult {
    pub correlation_id: Option<String>,
    pub status: Option<String>,
}

impl DynatraceObject for EventIngestResult {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            correlation_id: raw.str("correlationId"),
            status: raw.str("status"),
        })
    }
}

/// Response of event ingestion: one result per affected entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventIngestResults {
    pub report_count: Option<i64>,
    pub event_ingest_results: Vec<EventIngestResult>,
}

impl DynatraceObject for EventIngestResults {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            report_count: raw.i64("reportCount"),
            event_ingest_results: raw.list("eventIngestResults", ctx)?,
        })
    }
}
