//! Settings 2.0 API methods for [`Dynatrace`].

use crate::client::Dynatrace;
use crate::endpoints::{self, SettingsListOptions};
use crate::error::Result;
use crate::models::{SettingsObject, SettingsObjectCreate, SettingsObjectResponse};
use crate::object::RawMap;
use crate::pagination::PaginatedList;

impl Dynatrace {
    pub fn list_settings_objects(
        &self,
        options: &SettingsListOptions,
    ) -> PaginatedList<SettingsObject> {
        endpoints::list_settings_objects(&self.http, options)
    }

    pub async fn get_settings_object(&self, object_id: &str) -> Result<SettingsObject> {
        endpoints::get_settings_object(&self.http, object_id).await
    }

    /// Create objects; with `validate_only` the server checks them without storing.
    pub async fn create_settings_objects(
        &self,
        objects: &[SettingsObjectCreate],
        validate_only: bool,
    ) -> Result<Vec<SettingsObjectResponse>> {
        endpoints::create_settings_objects(&self.http, objects, validate_only).await
    }

    pub async fn update_settings_object(
        &self,
        object_id: &str,
        value: RawMap,
        update_token: Option<&str>,
    ) -> Result<SettingsObjectResponse> {
        endpoints::update_settings_object(&self.http, object_id, value, update_token).await
    }

    pub async fn delete_settings_object(
        &self,
        object_id: &str,
        update_token: Option<&str>,
    ) -> Result<()> {
        endpoints::delete_settings_object(&self.http, object_id, update_token).await
    }
}
