//! Extensions 2.0 API.

use crate::endpoints::{decode, encode_path_segment};
use crate::error::Result;
use crate::http::{HttpClient, QueryParams};
use crate::models::{Extension, MinimalExtension};
use crate::pagination::PaginatedList;

/// List installed extensions, optionally filtered by name substring.
pub fn list_extensions(
    http: &HttpClient,
    name: Option<&str>,
    page_size: Option<usize>,
) -> PaginatedList<MinimalExtension> {
    let mut params: QueryParams = vec![];
    crate::query_params! { params =>
        "name" => name,
        "pageSize" => page_size,
    }
    PaginatedList::new(http.clone(), "/api/v2/extensions", Some(params), None, "extensions")
}

/// List the uploaded versions of one extension.
pub fn list_extension_versions(
    http: &HttpClient,
    extension_name: &str,
    page_size: Option<usize>,
) -> PaginatedList<MinimalExtension> {
    let mut params: QueryParams = vec![];
    crate::query_params! { params =>
        "pageSize" => page_size,
    }
    let path = format!("/api/v2/extensions/{}", encode_path_segment(extension_name));
    PaginatedList::new(http.clone(), path, Some(params), None, "extensions")
}

pub async fn get_extension(http: &HttpClient, extension_name: &str, version: &str) -> Result<Extension> {
    let response = http.get(&version_path(extension_name, version), &[]).await?;
    decode(http, &response)
}

/// Delete one extension version. Returns the deleted definition.
pub async fn delete_extension(
    http: &HttpClient,
    extension_name: &str,
    version: &str,
) -> Result<Extension> {
    let response = http.delete(&version_path(extension_name, version)).await?;
    decode(http, &response)
}

fn version_path(extension_name: &str, version: &str) -> String {
    format!(
        "/api/v2/extensions/{}/{}",
        encode_path_segment(extension_name),
        encode_path_segment(version)
    )
}
