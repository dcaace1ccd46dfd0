//! Entity API methods for [`Dynatrace`].

use crate::client::Dynatrace;
use crate::endpoints::{self, EntityListOptions};
use crate::error::Result;
use crate::models::{Entity, EntityType};
use crate::pagination::PaginatedList;

impl Dynatrace {
    /// List entities matching `options`. Lazy: nothing is fetched until consumed.
    pub fn list_entities(&self, options: &EntityListOptions) -> PaginatedList<Entity> {
        endpoints::list_entities(&self.http, options)
    }

    pub async fn get_entity(&self, entity_id: &str, fields: &[String]) -> Result<Entity> {
        endpoints::get_entity(&self.http, entity_id, fields).await
    }

    pub fn list_entity_types(&self, page_size: Option<usize>) -> PaginatedList<EntityType> {
        endpoints::list_entity_types(&self.http, page_size)
    }
}
