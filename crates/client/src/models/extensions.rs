//! Extensions 2.0 (`/api/v2/extensions`).

use std::collections::BTreeMap;

use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::object::{DynatraceObject, ObjectContext, RawExt, RawMap};

/// Name and version of an extension, as returned by listings.
#[derive(Debug, Clone, Default)]
pub struct MinimalExtension {
    pub extension_name: Option<String>,
    pub version: Option<String>,
    ctx: ObjectContext,
}

impl DynatraceObject for MinimalExtension {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            extension_name: raw.str("extensionName"),
            version: raw.str("version"),
            ctx: ctx.clone(),
        })
    }
}

impl MinimalExtension {
    /// Fetch the full definition of this extension version.
    pub async fn get_full_extension(&self) -> Result<Extension> {
        let http = self.ctx.require_http("MinimalExtension")?;
        let (name, version) = identity(
            "MinimalExtension",
            self.extension_name.as_deref(),
            self.version.as_deref(),
        )?;
        endpoints::get_extension(http, name, version).await
    }
}

fn identity<'a>(
    model: &'static str,
    name: Option<&'a str>,
    version: Option<&'a str>,
) -> Result<(&'a str, &'a str)> {
    let name = name.ok_or(ClientError::MissingField {
        model,
        field: "extensionName",
    })?;
    let version = version.ok_or(ClientError::MissingField {
        model,
        field: "version",
    })?;
    Ok((name, version))
}

/// A feature set of an extension and the metrics it enables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub metric_keys: Vec<String>,
}

impl DynatraceObject for FeatureSet {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        let metrics: Vec<RawMap> = raw.list("metrics", ctx)?;
        Ok(Self {
            display_name: raw.str("displayName"),
            description: raw.str("description"),
            metric_keys: metrics.iter().filter_map(|m| m.str("key")).collect(),
        })
    }
}

/// Full definition of one extension version.
#[derive(Debug, Clone, Default)]
pub struct Extension {
    pub extension_name: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
    pub data_sources: Vec<String>,
    pub variables: Vec<String>,
    pub feature_sets: Vec<String>,
    pub feature_sets_details: BTreeMap<String, FeatureSet>,
    pub min_dynatrace_version: Option<String>,
    pub min_eec_version: Option<String>,
    pub file_hash: Option<String>,
    ctx: ObjectContext,
}

impl DynatraceObject for Extension {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        let mut feature_sets_details = BTreeMap::new();
        for (name, details) in raw.object("featureSetsDetails").unwrap_or_default() {
            feature_sets_details.insert(name, FeatureSet::construct(Some(&details), ctx)?);
        }

        Ok(Self {
            extension_name: raw.str("extensionName"),
            version: raw.str("version"),
            author: raw.object("author").and_then(|a| a.str("name")),
            data_sources: raw.strings("dataSources"),
            variables: raw.strings("variables"),
            feature_sets: raw.strings("featureSets"),
            feature_sets_details,
            min_dynatrace_version: raw.str("minDynatraceVersion"),
            min_eec_version: raw.str("minEECVersion"),
            file_hash: raw.str("fileHash"),
            ctx: ctx.clone(),
        })
    }
}

impl Extension {
    /// Delete this extension version. Returns the deleted definition.
    pub async fn delete(&self) -> Result<Extension> {
        let http = self.ctx.require_http("Extension")?;
        let (name, version) = identity(
            "Extension",
            self.extension_name.as_deref(),
            self.version.as_deref(),
        )?;
        endpoints::delete_extension(http, name, version).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extension_feature_sets() {
        let raw = json!({
            "extensionName": "com.dynatrace.extension.snmp-generic",
            "version": "1.0.2",
            "author": {"name": "Dynatrace"},
            "featureSets": ["default"],
            "featureSetsDetails": {
                "default": {
                    "description": "base metrics",
                    "metrics": [{"key": "snmp.generic.uptime"}, {"nokey": true}]
                }
            }
        });
        let extension = Extension::construct(Some(&raw), &ObjectContext::detached()).unwrap();

        assert_eq!(extension.author.as_deref(), Some("Dynatrace"));
        assert_eq!(
            extension.feature_sets_details["default"].metric_keys,
            vec!["snmp.generic.uptime".to_string()]
        );
    }

    #[tokio::test]
    async fn test_get_full_extension_requires_transport() {
        let minimal = MinimalExtension::construct(
            Some(&json!({"extensionName": "a", "version": "1"})),
            &ObjectContext::detached(),
        )
        .unwrap();
        assert!(matches!(
            minimal.get_full_extension().await,
            Err(ClientError::Detached("MinimalExtension"))
        ));
    }
}
