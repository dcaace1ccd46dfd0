//! Building blocks shared by several API areas.

use crate::error::Result;
use crate::object::{DynatraceObject, ObjectContext, RawExt, RawMap};

/// Identifier of a monitored entity together with its type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityId {
    pub id: Option<String>,
    pub entity_type: Option<String>,
}

impl DynatraceObject for EntityId {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            id: raw.str("id"),
            entity_type: raw.str("type"),
        })
    }
}

/// Short reference to an entity, as embedded in events and problems.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityStub {
    pub entity_id: Option<EntityId>,
    pub name: Option<String>,
}

impl DynatraceObject for EntityStub {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            entity_id: raw.nested("entityId", ctx)?,
            name: raw.str("name"),
        })
    }
}

/// A tag attached to a monitored entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeTag {
    pub context: Option<String>,
    pub key: Option<String>,
    pub value: Option<String>,
    pub string_representation: Option<String>,
}

impl DynatraceObject for MeTag {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            context: raw.str("context"),
            key: raw.str("key"),
            value: raw.str("value"),
            string_representation: raw.str("stringRepresentation"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagementZone {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl DynatraceObject for ManagementZone {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            id: raw.str("id"),
            name: raw.str("name"),
        })
    }
}

/// One failed validation inside an [`ErrorDetail`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub path: Option<String>,
    pub message: Option<String>,
    pub parameter_location: Option<String>,
    pub location: Option<String>,
}

impl DynatraceObject for ConstraintViolation {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            path: raw.str("path"),
            message: raw.str("message"),
            parameter_location: raw.str("parameterLocation"),
            location: raw.str("location"),
        })
    }
}

/// The `error` member of an error envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDetail {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub constraint_violations: Vec<ConstraintViolation>,
}

impl DynatraceObject for ErrorDetail {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            code: raw.i64("code"),
            message: raw.str("message"),
            constraint_violations: raw.list("constraintViolations", ctx)?,
        })
    }
}

/// `{"error": {...}}` as returned with 4xx/5xx statuses and inside
/// per-item results of bulk operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error: Option<ErrorDetail>,
}

impl DynatraceObject for ErrorEnvelope {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            error: raw.nested("error", ctx)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_stub_nested() {
        let raw = json!({
            "entityId": {"id": "HOST-0000000000000001", "type": "HOST"},
            "name": "web-01"
        });
        let stub = EntityStub::construct(Some(&raw), &ObjectContext::detached()).unwrap();

        assert_eq!(stub.name.as_deref(), Some("web-01"));
        let id = stub.entity_id.unwrap();
        assert_eq!(id.id.as_deref(), Some("HOST-0000000000000001"));
        assert_eq!(id.entity_type.as_deref(), Some("HOST"));
    }

    #[test]
    fn test_error_envelope() {
        let raw = json!({
            "error": {
                "code": 400,
                "message": "Constraints violated.",
                "constraintViolations": [
                    {"path": "scopes", "message": "must not be empty", "parameterLocation": "PAYLOAD_BODY"}
                ]
            }
        });
        let envelope = ErrorEnvelope::construct(Some(&raw), &ObjectContext::detached()).unwrap();
        let error = envelope.error.unwrap();

        assert_eq!(error.code, Some(400));
        assert_eq!(error.constraint_violations.len(), 1);
        assert_eq!(
            error.constraint_violations[0].parameter_location.as_deref(),
            Some("PAYLOAD_BODY")
        );
    }
}
