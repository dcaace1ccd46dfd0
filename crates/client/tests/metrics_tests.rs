//! Metrics API endpoint tests.
//!
//! - Descriptor listing and lookup
//! - Data-point queries with aligned null values
//! - Line-protocol ingestion and metric deletion

mod common;

use common::*;
use dynatrace_client::endpoints::{MetricListOptions, MetricQuery};
use dynatrace_client::models::AggregationType;
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param};

#[tokio::test]
async fn test_list_metrics_with_text_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/metrics"))
        .and(query_param("text", "cpu"))
        .and(query_param("fields", "+aggregationTypes,+unit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 2,
            "metrics": [
                {"metricId": "builtin:host.cpu.usage", "unit": "Percent", "aggregationTypes": ["auto", "avg", "max", "min"]},
                {"metricId": "builtin:host.cpu.idle", "unit": "Percent", "aggregationTypes": ["avg", "fancy"]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dt = test_client(&server.uri());
    let mut metrics = dt.list_metrics(&MetricListOptions {
        text: Some("cpu".to_string()),
        fields: vec!["+aggregationTypes".to_string(), "+unit".to_string()],
        ..Default::default()
    });

    let all = metrics.fetch_all().await.unwrap();
    assert_eq!(all[0].aggregation_types.len(), 4);
    assert_eq!(
        all[1].aggregation_types,
        vec![AggregationType::Avg, AggregationType::Unknown]
    );
}

#[tokio::test]
async fn test_query_metrics_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/metrics/query"))
        .and(query_param("metricSelector", "builtin:host.cpu.usage"))
        .and(query_param("resolution", "1h"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("metrics/query_metrics.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dt = test_client(&server.uri());
    let mut result = dt.query_metrics(&MetricQuery {
        metric_selector: "builtin:host.cpu.usage".to_string(),
        resolution: Some("1h".to_string()),
        ..Default::default()
    });

    let collections = result.fetch_all().await.unwrap();
    assert_eq!(collections.len(), 1);
    let series = &collections[0].data[0];
    assert_eq!(series.timestamps.len(), 3);
    assert_eq!(series.values, vec![Some(12.5), None, Some(14.25)]);
    assert_eq!(
        series.dimension_map.get("dt.entity.host").map(String::as_str),
        Some("HOST-0123456789ABCDEF")
    );
}

#[tokio::test]
async fn test_ingest_metrics_sends_line_protocol() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/metrics/ingest"))
        .and(header("content-type", "text/plain; charset=utf-8"))
        .and(body_string("cpu.temp,host=a 55\ncpu.temp,host=b 61"))
        .respond_with(
            ResponseTemplate::new(202).set_body_json(load_fixture("metrics/ingest_result.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dt = test_client(&server.uri());
    let result = dt
        .ingest_metrics(&[
            "cpu.temp,host=a 55".to_string(),
            "cpu.temp,host=b 61".to_string(),
        ])
        .await
        .unwrap();

    assert_eq!(result.lines_ok, Some(2));
    assert_eq!(result.lines_invalid, Some(0));
    assert!(result.error.is_none());
}

#[tokio::test]
async fn test_delete_metric() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/metrics/custom.checkout.latency"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    test_client(&server.uri())
        .delete_metric("custom.checkout.latency")
        .await
        .unwrap();
}
