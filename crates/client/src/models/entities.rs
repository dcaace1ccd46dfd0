//! Monitored entities and entity types (`/api/v2/entities`, `/api/v2/entityTypes`).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::common::{EntityId, ManagementZone, MeTag};
use crate::error::Result;
use crate::object::{DynatraceObject, ObjectContext, RawExt, RawMap, construct_all};

/// A monitored entity with its properties, tags and relationships.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    pub entity_id: Option<String>,
    pub entity_type: Option<String>,
    pub display_name: Option<String>,
    pub first_seen: Option<DateTime<Utc>>,
    pub last_seen: Option<DateTime<Utc>>,
    /// Type-specific properties, left untyped.
    pub properties: RawMap,
    pub tags: Vec<MeTag>,
    pub management_zones: Vec<ManagementZone>,
    pub icon: Option<EntityIcon>,
    /// Outgoing relationships keyed by relationship name.
    pub from_relationships: BTreeMap<String, Vec<EntityId>>,
    /// Incoming relationships keyed by relationship name.
    pub to_relationships: BTreeMap<String, Vec<EntityId>>,
}

impl DynatraceObject for Entity {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            entity_id: raw.str("entityId"),
            entity_type: raw.str("type"),
            display_name: raw.str("displayName"),
            first_seen: raw.timestamp("firstSeenTms"),
            last_seen: raw.timestamp("lastSeenTms"),
            properties: raw.object("properties").unwrap_or_default(),
            tags: raw.list("tags", ctx)?,
            management_zones: raw.list("managementZones", ctx)?,
            icon: raw.nested("icon", ctx)?,
            from_relationships: relationships(raw, "fromRelationships", ctx)?,
            to_relationships: relationships(raw, "toRelationships", ctx)?,
        })
    }
}

fn relationships(
    raw: &RawMap,
    key: &str,
    ctx: &ObjectContext,
) -> Result<BTreeMap<String, Vec<EntityId>>> {
    let mut out = BTreeMap::new();
    for (name, targets) in raw.object(key).unwrap_or_default() {
        if let Value::Array(items) = targets {
            out.insert(name, construct_all(&items, ctx)?);
        }
    }
    Ok(out)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityIcon {
    pub primary_icon_type: Option<String>,
    pub secondary_icon_type: Option<String>,
    pub custom_icon_path: Option<String>,
}

impl DynatraceObject for EntityIcon {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            primary_icon_type: raw.str("primaryIconType"),
            secondary_icon_type: raw.str("secondaryIconType"),
            custom_icon_path: raw.str("customIconPath"),
        })
    }
}

/// A property an entity type may carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityTypeProperty {
    pub id: Option<String>,
    pub property_type: Option<String>,
    pub display_name: Option<String>,
}

impl DynatraceObject for EntityTypeProperty {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            id: raw.str("id"),
            property_type: raw.str("type"),
            display_name: raw.str("displayName"),
        })
    }
}

/// Schema of one entity type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityType {
    pub entity_type: Option<String>,
    pub display_name: Option<String>,
    pub dimension_key: Option<String>,
    pub entity_limit_exceeded: Option<bool>,
    pub properties: Vec<EntityTypeProperty>,
    pub tags: Option<String>,
    pub management_zones: Option<String>,
}

impl DynatraceObject for EntityType {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            entity_type: raw.str("type"),
            display_name: raw.str("displayName"),
            dimension_key: raw.str("dimensionKey"),
            entity_limit_exceeded: raw.bool("entityLimitExceeded"),
            properties: raw.list("properties", ctx)?,
            tags: raw.str("tags"),
            management_zones: raw.str("managementZones"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entity_relationships() {
        let raw = json!({
            "entityId": "PROCESS_GROUP_INSTANCE-1",
            "type": "PROCESS_GROUP_INSTANCE",
            "fromRelationships": {
                "isProcessOf": [{"id": "HOST-1", "type": "HOST"}],
                "broken": "not-a-list"
            },
            "toRelationships": {
                "calls": [{"id": "SERVICE-1", "type": "SERVICE"}, {"id": "SERVICE-2", "type": "SERVICE"}]
            }
        });
        let entity = Entity::construct(Some(&raw), &ObjectContext::detached()).unwrap();

        assert_eq!(entity.from_relationships.len(), 1);
        assert_eq!(
            entity.from_relationships["isProcessOf"][0].id.as_deref(),
            Some("HOST-1")
        );
        assert_eq!(entity.to_relationships["calls"].len(), 2);
        assert!(entity.properties.is_empty());
    }
}
