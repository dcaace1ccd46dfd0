//! Settings 2.0 objects API.

use serde_json::{Map, Value};

use crate::endpoints::{decode, decode_array, encode_path_segment};
use crate::error::Result;
use crate::http::{HttpClient, Method, QueryParams, RequestBody};
use crate::models::{SettingsObject, SettingsObjectCreate, SettingsObjectResponse};
use crate::object::{RawMap, ToRaw};
use crate::pagination::PaginatedList;

const OBJECTS_PATH: &str = "/api/v2/settings/objects";

#[derive(Debug, Clone, Default)]
pub struct SettingsListOptions {
    pub schema_ids: Vec<String>,
    pub scopes: Vec<String>,
    pub external_ids: Vec<String>,
    /// e.g. `objectId,value,updateToken`
    pub fields: Option<String>,
    pub filter: Option<String>,
    pub page_size: Option<usize>,
}

pub fn list_settings_objects(
    http: &HttpClient,
    options: &SettingsListOptions,
) -> PaginatedList<SettingsObject> {
    let mut params: QueryParams = vec![];
    crate::query_params! { params =>
        "schemaIds" => join options.schema_ids,
        "scopes" => join options.scopes,
        "externalIds" => join options.external_ids,
        "fields" => ref options.fields,
        "filter" => ref options.filter,
        "pageSize" => options.page_size,
    }
    PaginatedList::new(http.clone(), OBJECTS_PATH, Some(params), None, "items")
}

pub async fn get_settings_object(http: &HttpClient, object_id: &str) -> Result<SettingsObject> {
    let response = http.get(&object_path(object_id), &[]).await?;
    decode(http, &response)
}

/// Create objects in one request. The server answers per object, in order.
pub async fn create_settings_objects(
    http: &HttpClient,
    objects: &[SettingsObjectCreate],
    validate_only: bool,
) -> Result<Vec<SettingsObjectResponse>> {
    let body = objects
        .iter()
        .map(|o| o.to_raw().map(Value::Object))
        .collect::<Result<Vec<_>>>()?;

    let mut params: QueryParams = vec![];
    if validate_only {
        params.push(("validateOnly".to_string(), "true".to_string()));
    }

    let response = http
        .make_request(
            OBJECTS_PATH,
            &params,
            None,
            Method::POST,
            Some(RequestBody::Json(Value::Array(body))),
        )
        .await?;
    decode_array(http, &response)
}

/// Replace the value of an object. Pass the `updateToken` read with the
/// object for optimistic locking.
pub async fn update_settings_object(
    http: &HttpClient,
    object_id: &str,
    value: RawMap,
    update_token: Option<&str>,
) -> Result<SettingsObjectResponse> {
    let mut body = Map::new();
    body.insert("value".to_string(), Value::Object(value));
    if let Some(token) = update_token {
        body.insert("updateToken".to_string(), Value::String(token.to_string()));
    }

    let response = http.put_json(&object_path(object_id), Value::Object(body)).await?;
    decode(http, &response)
}

pub async fn delete_settings_object(
    http: &HttpClient,
    object_id: &str,
    update_token: Option<&str>,
) -> Result<()> {
    let mut params: QueryParams = vec![];
    crate::query_params! { params =>
        "updateToken" => update_token,
    }
    http.make_request(&object_path(object_id), &params, None, Method::DELETE, None)
        .await?;
    Ok(())
}

fn object_path(object_id: &str) -> String {
    format!("{OBJECTS_PATH}/{}", encode_path_segment(object_id))
}
