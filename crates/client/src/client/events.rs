//! Event API methods for [`Dynatrace`].

use crate::client::Dynatrace;
use crate::endpoints::{self, EventListOptions};
use crate::error::Result;
use crate::models::{Event, EventIngest, EventIngestResults};
use crate::pagination::PaginatedList;

impl Dynatrace {
    pub fn list_events(&self, options: &EventListOptions) -> PaginatedList<Event> {
        endpoints::list_events(&self.http, options)
    }

    pub async fn get_event(&self, event_id: &str) -> Result<Event> {
        endpoints::get_event(&self.http, event_id).await
    }

    pub async fn ingest_event(&self, event: &EventIngest) -> Result<EventIngestResults> {
        endpoints::ingest_event(&self.http, event).await
    }
}
