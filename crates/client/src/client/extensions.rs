//! Extensions 2.0 API methods for [`Dynatrace`].

use crate::client::Dynatrace;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Extension, MinimalExtension};
use crate::pagination::PaginatedList;

impl Dynatrace {
    pub fn list_extensions(
        &self,
        name: Option<&str>,
        page_size: Option<usize>,
    ) -> PaginatedList<MinimalExtension> {
        endpoints::list_extensions(&self.http, name, page_size)
    }

    pub fn list_extension_versions(
        &self,
        extension_name: &str,
        page_size: Option<usize>,
    ) -> PaginatedList<MinimalExtension> {
        endpoints::list_extension_versions(&self.http, extension_name, page_size)
    }

    pub async fn get_extension(&self, extension_name: &str, version: &str) -> Result<Extension> {
        endpoints::get_extension(&self.http, extension_name, version).await
    }

    pub async fn delete_extension(&self, extension_name: &str, version: &str) -> Result<Extension> {
        endpoints::delete_extension(&self.http, extension_name, version).await
    }
}
