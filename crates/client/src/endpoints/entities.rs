//! Monitored entities (`/api/v2/entities`, `/api/v2/entityTypes`).

use crate::endpoints::{decode, encode_path_segment};
use crate::error::Result;
use crate::http::{HttpClient, QueryParams};
use crate::models::{Entity, EntityType};
use crate::pagination::PaginatedList;

/// Filters for [`list_entities`].
#[derive(Debug, Clone, Default)]
pub struct EntityListOptions {
    /// e.g. `type("HOST"),tag("env:prod")`
    pub entity_selector: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    /// Extra properties to include, e.g. `+properties`, `+toRelationships`.
    pub fields: Vec<String>,
    pub sort: Option<String>,
    pub page_size: Option<usize>,
}

/// List entities matching `options`.
pub fn list_entities(http: &HttpClient, options: &EntityListOptions) -> PaginatedList<Entity> {
    let mut params: QueryParams = vec![];
    crate::query_params! { params =>
        "entitySelector" => ref options.entity_selector,
        "from" => ref options.from,
        "to" => ref options.to,
        "fields" => join options.fields,
        "sort" => ref options.sort,
        "pageSize" => options.page_size,
    }
    PaginatedList::new(http.clone(), "/api/v2/entities", Some(params), None, "entities")
}

/// Get a single entity.
pub async fn get_entity(http: &HttpClient, entity_id: &str, fields: &[String]) -> Result<Entity> {
    let mut params: QueryParams = vec![];
    crate::query_params! { params =>
        "fields" => join fields,
    }
    let path = format!("/api/v2/entities/{}", encode_path_segment(entity_id));
    let response = http.get(&path, &params).await?;
    decode(http, &response)
}

/// List entity types and their properties.
pub fn list_entity_types(http: &HttpClient, page_size: Option<usize>) -> PaginatedList<EntityType> {
    let mut params: QueryParams = vec![];
    crate::query_params! { params =>
        "pageSize" => page_size,
    }
    PaginatedList::new(http.clone(), "/api/v2/entityTypes", Some(params), None, "types")
}
