//! Hosts from the v1 topology API (`/api/v1/entity/infrastructure/hosts`).

use chrono::{DateTime, Utc};

use super::common::ManagementZone;
use crate::error::Result;
use crate::object::{DynatraceObject, ObjectContext, RawExt, RawMap};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagInfo {
    pub context: Option<String>,
    pub key: Option<String>,
    pub value: Option<String>,
}

impl DynatraceObject for TagInfo {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            context: raw.str("context"),
            key: raw.str("key"),
            value: raw.str("value"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostGroup {
    pub me_identifier: Option<String>,
    pub name: Option<String>,
}

impl DynatraceObject for HostGroup {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            me_identifier: raw.str("meIdentifier"),
            name: raw.str("name"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Host {
    pub entity_id: Option<String>,
    pub display_name: Option<String>,
    pub discovered_name: Option<String>,
    pub first_seen: Option<DateTime<Utc>>,
    pub last_seen: Option<DateTime<Utc>>,
    pub tags: Vec<TagInfo>,
    pub os_type: Option<String>,
    pub os_version: Option<String>,
    pub cpu_cores: Option<i64>,
    pub ip_addresses: Vec<String>,
    pub monitoring_mode: Option<String>,
    pub network_zone_id: Option<String>,
    pub consumed_host_units: Option<f64>,
    pub host_group: Option<HostGroup>,
    pub management_zones: Vec<ManagementZone>,
}

impl DynatraceObject for Host {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            entity_id: raw.str("entityId"),
            display_name: raw.str("displayName"),
            discovered_name: raw.str("discoveredName"),
            first_seen: raw.timestamp("firstSeenTimestamp"),
            last_seen: raw.timestamp("lastSeenTimestamp"),
            tags: raw.list("tags", ctx)?,
            os_type: raw.str("osType"),
            os_version: raw.str("osVersion"),
            cpu_cores: raw.i64("cpuCores"),
            ip_addresses: raw.strings("ipAddresses"),
            monitoring_mode: raw.str("monitoringMode"),
            network_zone_id: raw.str("networkZoneId"),
            consumed_host_units: raw.f64("consumedHostUnits"),
            host_group: raw.nested("hostGroup", ctx)?,
            management_zones: raw.list("managementZones", ctx)?,
        })
    }
}
