//! Access tokens (`/api/v2/apiTokens`).

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::Serialize;

use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::object::{DynatraceObject, ObjectContext, RawExt, RawMap, ToRaw};

/// Token metadata. The secret value itself is only returned on creation.
#[derive(Debug, Clone, Default)]
pub struct ApiToken {
    pub id: Option<String>,
    pub name: Option<String>,
    pub enabled: Option<bool>,
    pub personal_access_token: Option<bool>,
    pub owner: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub last_used_date: Option<DateTime<Utc>>,
    pub last_used_ip_address: Option<String>,
    pub scopes: Vec<String>,
    ctx: ObjectContext,
}

impl DynatraceObject for ApiToken {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            id: raw.str("id"),
            name: raw.str("name"),
            enabled: raw.bool("enabled"),
            personal_access_token: raw.bool("personalAccessToken"),
            owner: raw.str("owner"),
            creation_date: raw.timestamp("creationDate"),
            expiration_date: raw.timestamp("expirationDate"),
            last_used_date: raw.timestamp("lastUsedDate"),
            last_used_ip_address: raw.str("lastUsedIpAddress"),
            scopes: raw.strings("scopes"),
            ctx: ctx.clone(),
        })
    }
}

impl ApiToken {
    /// Delete this token.
    pub async fn delete(&self) -> Result<()> {
        let http = self.ctx.require_http("ApiToken")?;
        let id = self.id.as_deref().ok_or(ClientError::MissingField {
            model: "ApiToken",
            field: "id",
        })?;
        endpoints::delete_token(http, id).await
    }
}

/// Body of `POST /api/v2/apiTokens`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTokenCreate {
    pub name: String,
    pub scopes: Vec<String>,
    /// Absolute ISO 8601 date or a relative expression such as `now+14d`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_access_token: Option<bool>,
}

impl ToRaw for ApiTokenCreate {}

impl DynatraceObject for ApiTokenCreate {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            name: raw.str("name").unwrap_or_default(),
            scopes: raw.strings("scopes"),
            expiration_date: raw.str("expirationDate"),
            personal_access_token: raw.bool("personalAccessToken"),
        })
    }
}

/// Response of token creation, carrying the only copy of the secret.
#[derive(Debug, Clone, Default)]
pub struct ApiTokenCreated {
    pub id: Option<String>,
    pub token: Option<SecretString>,
    pub expiration_date: Option<DateTime<Utc>>,
}

impl DynatraceObject for ApiTokenCreated {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            id: raw.str("id"),
            token: raw.str("token").map(|t| SecretString::new(t.into())),
            expiration_date: raw.timestamp("expirationDate"),
        })
    }
}
