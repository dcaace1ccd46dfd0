//! Top-level Dynatrace API client.
//!
//! [`Dynatrace`] owns one [`HttpClient`] and exposes every endpoint as a
//! method. Methods are grouped by API area in submodules:
//! - `entities`: monitored entities and entity types
//! - `metrics`: metric descriptors, data-point queries, ingestion
//! - `events`: event listing and ingestion
//! - `problems`: problem listing and closing
//! - `audit_logs`: audit log entries
//! - `tokens`: access token management
//! - `extensions`: Extensions 2.0
//! - `settings`: Settings 2.0 objects
//! - `hosts`: v1 topology hosts
//!
//! # What this module does NOT handle:
//! - Request construction and decoding (delegated to [`crate::endpoints`])
//! - Retries and authentication headers (handled by [`HttpClient`])

mod audit_logs;
mod entities;
mod events;
mod extensions;
mod hosts;
mod metrics;
mod problems;
mod settings;
mod tokens;

use dynatrace_config::Config;

use crate::error::Result;
use crate::http::HttpClient;

/// Dynatrace environment API client.
///
/// ```rust,ignore
/// use dynatrace_client::Dynatrace;
/// use dynatrace_config::ConfigLoader;
///
/// let config = ConfigLoader::new().load_dotenv()?.from_env()?.build()?;
/// let dt = Dynatrace::from_config(&config)?;
///
/// let mut hosts = dt.list_entities(&EntityListOptions {
///     entity_selector: Some("type(HOST)".into()),
///     ..Default::default()
/// });
/// let mut iter = hosts.iter();
/// while let Some(entity) = iter.next().await {
///     println!("{:?}", entity?.display_name);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Dynatrace {
    pub(crate) http: HttpClient,
}

impl Dynatrace {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Build the transport from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = HttpClient::builder().from_config(config).build()?;
        Ok(Self::new(http))
    }

    /// The underlying transport, for requests not covered by a method.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}
