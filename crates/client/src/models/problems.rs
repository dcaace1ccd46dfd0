//! Problems (`/api/v2/problems`).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::common::{EntityStub, ManagementZone, MeTag};
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::object::{DynatraceObject, ObjectContext, RawExt, RawMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemStatus {
    Open,
    Closed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactLevel {
    Application,
    Environment,
    Infrastructure,
    Services,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityLevel {
    Availability,
    CustomAlert,
    Error,
    Info,
    MonitoringUnavailable,
    Performance,
    ResourceContention,
    #[serde(other)]
    Unknown,
}

/// A detected problem.
///
/// Problems are attached to the transport they were fetched with, so they
/// can be closed directly.
#[derive(Debug, Clone, Default)]
pub struct Problem {
    pub problem_id: Option<String>,
    pub display_id: Option<String>,
    pub title: Option<String>,
    pub impact_level: Option<ImpactLevel>,
    pub severity_level: Option<SeverityLevel>,
    pub status: Option<ProblemStatus>,
    pub affected_entities: Vec<EntityStub>,
    pub impacted_entities: Vec<EntityStub>,
    pub root_cause_entity: Option<EntityStub>,
    pub management_zones: Vec<ManagementZone>,
    pub entity_tags: Vec<MeTag>,
    pub start_time: Option<DateTime<Utc>>,
    /// `None` while the problem is open (the API reports `-1`).
    pub end_time: Option<DateTime<Utc>>,
    ctx: ObjectContext,
}

impl DynatraceObject for Problem {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        let end_time = match raw.i64("endTime") {
            Some(ms) if ms < 0 => None,
            _ => raw.timestamp("endTime"),
        };

        Ok(Self {
            problem_id: raw.str("problemId"),
            display_id: raw.str("displayId"),
            title: raw.str("title"),
            impact_level: raw.enumeration("impactLevel"),
            severity_level: raw.enumeration("severityLevel"),
            status: raw.enumeration("status"),
            affected_entities: raw.list("affectedEntities", ctx)?,
            impacted_entities: raw.list("impactedEntities", ctx)?,
            root_cause_entity: raw.nested("rootCauseEntity", ctx)?,
            management_zones: raw.list("managementZones", ctx)?,
            entity_tags: raw.list("entityTags", ctx)?,
            start_time: raw.timestamp("startTime"),
            end_time,
            ctx: ctx.clone(),
        })
    }
}

impl Problem {
    pub fn is_open(&self) -> bool {
        self.status == Some(ProblemStatus::Open)
    }

    /// Close this problem with a comment.
    pub async fn close(&self, message: &str) -> Result<ProblemCloseResult> {
        let http = self.ctx.require_http("Problem")?;
        let id = self.problem_id.as_deref().ok_or(ClientError::MissingField {
            model: "Problem",
            field: "problemId",
        })?;
        endpoints::close_problem(http, id, message).await
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comment {
    pub id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub content: Option<String>,
    pub author_name: Option<String>,
    pub context: Option<String>,
}

impl DynatraceObject for Comment {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            id: raw.str("id"),
            created_at: raw.timestamp("createdAtTimestamp"),
            content: raw.str("content"),
            author_name: raw.str("authorName"),
            context: raw.str("context"),
        })
    }
}

/// Response of `POST /api/v2/problems/{problemId}/close`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProblemCloseResult {
    pub problem_id: Option<String>,
    pub closing: Option<bool>,
    pub comment: Option<Comment>,
}

impl DynatraceObject for ProblemCloseResult {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            problem_id: raw.str("problemId"),
            closing: raw.bool("closing"),
            comment: raw.nested("comment", ctx)?,
        })
    }
}
