//! Metrics API v2: descriptors, queries, ingestion.

use crate::endpoints::{decode, encode_path_segment};
use crate::error::Result;
use crate::http::{HttpClient, Method, QueryParams, RequestBody};
use crate::models::{MetricDescriptor, MetricIngestResult, MetricSeriesCollection};
use crate::pagination::PaginatedList;

/// Filters for [`list_metrics`].
#[derive(Debug, Clone, Default)]
pub struct MetricListOptions {
    pub metric_selector: Option<String>,
    /// Free-text search over key, name and description.
    pub text: Option<String>,
    pub fields: Vec<String>,
    pub written_since: Option<String>,
    pub metadata_selector: Option<String>,
    pub page_size: Option<usize>,
}

/// A data-point query for [`query_metrics`].
#[derive(Debug, Clone, Default)]
pub struct MetricQuery {
    pub metric_selector: String,
    pub resolution: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub entity_selector: Option<String>,
    pub mz_selector: Option<String>,
}

pub fn list_metrics(http: &HttpClient, options: &MetricListOptions) -> PaginatedList<MetricDescriptor> {
    let mut params: QueryParams = vec![];
    crate::query_params! { params =>
        "metricSelector" => ref options.metric_selector,
        "text" => ref options.text,
        "fields" => join options.fields,
        "writtenSince" => ref options.written_since,
        "metadataSelector" => ref options.metadata_selector,
        "pageSize" => options.page_size,
    }
    PaginatedList::new(http.clone(), "/api/v2/metrics", Some(params), None, "metrics")
}

pub async fn get_metric(http: &HttpClient, metric_key: &str) -> Result<MetricDescriptor> {
    let path = format!("/api/v2/metrics/{}", encode_path_segment(metric_key));
    let response = http.get(&path, &[]).await?;
    decode(http, &response)
}

/// Query data points. One collection is yielded per metric in the selector.
pub fn query_metrics(http: &HttpClient, query: &MetricQuery) -> PaginatedList<MetricSeriesCollection> {
    let mut params: QueryParams = vec![];
    crate::query_params! { params =>
        "metricSelector" => required_clone query.metric_selector,
        "resolution" => ref query.resolution,
        "from" => ref query.from,
        "to" => ref query.to,
        "entitySelector" => ref query.entity_selector,
        "mzSelector" => ref query.mz_selector,
    }
    PaginatedList::new(http.clone(), "/api/v2/metrics/query", Some(params), None, "result")
}

/// Push data points in line protocol, one line per data point.
pub async fn ingest_metrics(http: &HttpClient, lines: &[String]) -> Result<MetricIngestResult> {
    let response = http
        .make_request(
            "/api/v2/metrics/ingest",
            &[],
            None,
            Method::POST,
            Some(RequestBody::Text(lines.join("\n"))),
        )
        .await?;
    decode(http, &response)
}

/// Delete a custom metric and its data.
pub async fn delete_metric(http: &HttpClient, metric_key: &str) -> Result<()> {
    let path = format!("/api/v2/metrics/{}", encode_path_segment(metric_key));
    http.delete(&path).await?;
    Ok(())
}
