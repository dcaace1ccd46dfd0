//! Access token API methods for [`Dynatrace`].

use secrecy::SecretString;

use crate::client::Dynatrace;
use crate::endpoints::{self, TokenListOptions};
use crate::error::Result;
use crate::models::{ApiToken, ApiTokenCreate, ApiTokenCreated};
use crate::pagination::PaginatedList;

impl Dynatrace {
    pub fn list_tokens(&self, options: &TokenListOptions) -> PaginatedList<ApiToken> {
        endpoints::list_tokens(&self.http, options)
    }

    pub async fn get_token(&self, token_id: &str) -> Result<ApiToken> {
        endpoints::get_token(&self.http, token_id).await
    }

    pub async fn create_token(&self, request: &ApiTokenCreate) -> Result<ApiTokenCreated> {
        endpoints::create_token(&self.http, request).await
    }

    pub async fn lookup_token(&self, token: &SecretString) -> Result<ApiToken> {
        endpoints::lookup_token(&self.http, token).await
    }

    pub async fn delete_token(&self, token_id: &str) -> Result<()> {
        endpoints::delete_token(&self.http, token_id).await
    }
}
