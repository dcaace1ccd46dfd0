//! Settings 2.0 objects (`/api/v2/settings/objects`).

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::common::ErrorDetail;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::object::{DynatraceObject, ObjectContext, RawExt, RawMap, ToRaw};

/// A stored settings object. `value` follows the schema named by `schema_id`.
#[derive(Debug, Clone, Default)]
pub struct SettingsObject {
    pub object_id: Option<String>,
    pub schema_id: Option<String>,
    pub schema_version: Option<String>,
    pub scope: Option<String>,
    pub external_id: Option<String>,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    pub update_token: Option<String>,
    pub value: RawMap,
    ctx: ObjectContext,
}

impl DynatraceObject for SettingsObject {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            object_id: raw.str("objectId"),
            schema_id: raw.str("schemaId"),
            schema_version: raw.str("schemaVersion"),
            scope: raw.str("scope"),
            external_id: raw.str("externalId"),
            summary: raw.str("summary"),
            author: raw.str("author"),
            created: raw.timestamp("created"),
            modified: raw.timestamp("modified"),
            update_token: raw.str("updateToken"),
            value: raw.object("value").unwrap_or_default(),
            ctx: ctx.clone(),
        })
    }
}

impl SettingsObject {
    fn object_id(&self) -> Result<&str> {
        self.object_id.as_deref().ok_or(ClientError::MissingField {
            model: "SettingsObject",
            field: "objectId",
        })
    }

    /// Replace this object's value. The stored update token, if any, guards
    /// against concurrent modification.
    pub async fn update(&self, value: RawMap) -> Result<SettingsObjectResponse> {
        let http = self.ctx.require_http("SettingsObject")?;
        endpoints::update_settings_object(http, self.object_id()?, value, self.update_token.as_deref())
            .await
    }

    pub async fn delete(&self) -> Result<()> {
        let http = self.ctx.require_http("SettingsObject")?;
        endpoints::delete_settings_object(http, self.object_id()?, self.update_token.as_deref())
            .await
    }
}

/// One element of the body of `POST /api/v2/settings/objects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsObjectCreate {
    pub schema_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    pub scope: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_after: Option<String>,
    pub value: RawMap,
}

impl ToRaw for SettingsObjectCreate {}

impl DynatraceObject for SettingsObjectCreate {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            schema_id: raw.str("schemaId").unwrap_or_default(),
            schema_version: raw.str("schemaVersion"),
            scope: raw.str("scope").unwrap_or_default(),
            external_id: raw.str("externalId"),
            insert_after: raw.str("insertAfter"),
            value: raw.object("value").unwrap_or_default(),
        })
    }
}

/// Per-item result of a settings create or update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsObjectResponse {
    pub code: Option<i64>,
    pub object_id: Option<String>,
    pub error: Option<ErrorDetail>,
    pub invalid_value: Option<Value>,
}

impl DynatraceObject for SettingsObjectResponse {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            code: raw.i64("code"),
            object_id: raw.str("objectId"),
            error: raw.nested("error", ctx)?,
            invalid_value: raw.value("invalidValue").cloned(),
        })
    }
}

impl SettingsObjectResponse {
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.code.is_none_or(|c| (200..300).contains(&c))
    }
}
