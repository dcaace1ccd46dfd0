//! Access token API v2.

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};

use crate::endpoints::{decode, encode_path_segment};
use crate::error::Result;
use crate::http::{HttpClient, QueryParams};
use crate::models::{ApiToken, ApiTokenCreate, ApiTokenCreated};
use crate::object::ToRaw;
use crate::pagination::PaginatedList;

#[derive(Debug, Clone, Default)]
pub struct TokenListOptions {
    /// e.g. `personalAccessToken(false)`
    pub api_tokens_selector: Option<String>,
    /// Extra properties, e.g. `+scopes,+lastUsedDate`.
    pub fields: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub sort: Option<String>,
    pub page_size: Option<usize>,
}

pub fn list_tokens(http: &HttpClient, options: &TokenListOptions) -> PaginatedList<ApiToken> {
    let mut params: QueryParams = vec![];
    crate::query_params! { params =>
        "apiTokensSelector" => ref options.api_tokens_selector,
        "fields" => ref options.fields,
        "from" => ref options.from,
        "to" => ref options.to,
        "sort" => ref options.sort,
        "pageSize" => options.page_size,
    }
    PaginatedList::new(http.clone(), "/api/v2/apiTokens", Some(params), None, "apiTokens")
}

pub async fn get_token(http: &HttpClient, token_id: &str) -> Result<ApiToken> {
    let path = format!("/api/v2/apiTokens/{}", encode_path_segment(token_id));
    let response = http.get(&path, &[]).await?;
    decode(http, &response)
}

/// Create a token. The returned secret is not retrievable again.
pub async fn create_token(http: &HttpClient, request: &ApiTokenCreate) -> Result<ApiTokenCreated> {
    let body = Value::Object(request.to_raw()?);
    let response = http.post_json("/api/v2/apiTokens", body).await?;
    decode(http, &response)
}

/// Resolve a token secret to its metadata.
pub async fn lookup_token(http: &HttpClient, token: &SecretString) -> Result<ApiToken> {
    let body = json!({ "token": token.expose_secret() });
    let response = http.post_json("/api/v2/apiTokens/lookup", body).await?;
    decode(http, &response)
}

pub async fn delete_token(http: &HttpClient, token_id: &str) -> Result<()> {
    let path = format!("/api/v2/apiTokens/{}", encode_path_segment(token_id));
    http.delete(&path).await?;
    Ok(())
}
