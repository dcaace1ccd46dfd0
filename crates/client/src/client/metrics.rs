//! Metric API methods for [`Dynatrace`].

use crate::client::Dynatrace;
use crate::endpoints::{self, MetricListOptions, MetricQuery};
use crate::error::Result;
use crate::models::{MetricDescriptor, MetricIngestResult, MetricSeriesCollection};
use crate::pagination::PaginatedList;

impl Dynatrace {
    pub fn list_metrics(&self, options: &MetricListOptions) -> PaginatedList<MetricDescriptor> {
        endpoints::list_metrics(&self.http, options)
    }

    pub async fn get_metric(&self, metric_key: &str) -> Result<MetricDescriptor> {
        endpoints::get_metric(&self.http, metric_key).await
    }

    pub fn query_metrics(&self, query: &MetricQuery) -> PaginatedList<MetricSeriesCollection> {
        endpoints::query_metrics(&self.http, query)
    }

    /// Push data points in line protocol.
    pub async fn ingest_metrics(&self, lines: &[String]) -> Result<MetricIngestResult> {
        endpoints::ingest_metrics(&self.http, lines).await
    }

    pub async fn delete_metric(&self, metric_key: &str) -> Result<()> {
        endpoints::delete_metric(&self.http, metric_key).await
    }
}
