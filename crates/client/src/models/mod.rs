//! Typed models for Dynatrace API resources.
//!
//! Every type implements [`DynatraceObject`](crate::DynatraceObject) and is
//! built from raw JSON through the lenient accessors of
//! [`RawExt`](crate::RawExt). Types are organized by API area in submodules
//! and re-exported here.

pub mod audit_logs;
pub mod common;
pub mod entities;
pub mod events;
pub mod extensions;
pub mod hosts;
pub mod metric;
pub mod problems;
pub mod settings;
pub mod tokens;

pub use audit_logs::{AuditCategory, AuditEventType, AuditLogEntry};
pub use common::{
    ConstraintViolation, EntityId, EntityStub, ErrorDetail, ErrorEnvelope, ManagementZone, MeTag,
};
pub use entities::{Entity, EntityIcon, EntityType, EntityTypeProperty};
pub use events::{
    Event, EventIngest, EventIngestResult, EventIngestResults, EventProperty, EventStatus,
};
pub use extensions::{Extension, FeatureSet, MinimalExtension};
pub use hosts::{Host, HostGroup, TagInfo};
pub use metric::{
    AggregationType, MetricDefaultAggregation, MetricDescriptor, MetricDimensionDefinition,
    MetricIngestResult, MetricSeries, MetricSeriesCollection,
};
pub use problems::{
    Comment, ImpactLevel, Problem, ProblemCloseResult, ProblemStatus, SeverityLevel,
};
pub use settings::{SettingsObject, SettingsObjectCreate, SettingsObjectResponse};
pub use tokens::{ApiToken, ApiTokenCreate, ApiTokenCreated};
