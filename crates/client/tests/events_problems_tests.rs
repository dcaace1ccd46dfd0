//! Events and problems endpoint tests.

mod common;

use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use common::*;
use dynatrace_client::endpoints::{EventListOptions, ProblemListOptions};
use dynatrace_client::models::{EventIngest, EventStatus};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};

#[tokio::test]
async fn test_list_events() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/events"))
        .and(query_param("eventSelector", "eventType(\"CUSTOM_DEPLOYMENT\")"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 1,
            "events": [{
                "eventId": "-4353545367864453",
                "eventType": "CUSTOM_DEPLOYMENT",
                "title": "checkout 2.4.1",
                "startTime": 1700000000000i64,
                "endTime": 1700000900000i64,
                "status": "CLOSED",
                "entityId": {"entityId": {"id": "SERVICE-90AB12CD34EF5678", "type": "SERVICE"}, "name": "checkout"},
                "properties": [{"key": "dt.event.deployment.version", "value": "2.4.1"}]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dt = test_client(&server.uri());
    let mut events = dt.list_events(&EventListOptions {
        event_selector: Some("eventType(\"CUSTOM_DEPLOYMENT\")".to_string()),
        ..Default::default()
    });

    let all = events.fetch_all().await.unwrap();
    assert_eq!(all[0].status, Some(EventStatus::Closed));
    assert_eq!(
        all[0].entity_id.as_ref().and_then(|e| e.name.as_deref()),
        Some("checkout")
    );
    assert_eq!(all[0].properties[0].value.as_deref(), Some("2.4.1"));
}

#[tokio::test]
async fn test_ingest_event_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/events/ingest"))
        .and(body_json(json!({
            "eventType": "CUSTOM_INFO",
            "title": "Cache flushed",
            "startTime": 1700000000000i64,
            "entitySelector": "type(SERVICE),entityName(checkout)",
            "properties": {"initiator": "ops"}
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(load_fixture("events/ingest_result.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut properties = BTreeMap::new();
    properties.insert("initiator".to_string(), "ops".to_string());
    let event = EventIngest {
        event_type: "CUSTOM_INFO".to_string(),
        title: "Cache flushed".to_string(),
        entity_selector: Some("type(SERVICE),entityName(checkout)".to_string()),
        properties,
        ..Default::default()
    }
    .starting_at(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap());

    let result = test_client(&server.uri()).ingest_event(&event).await.unwrap();
    assert_eq!(result.report_count, Some(1));
    assert_eq!(result.event_ingest_results[0].status.as_deref(), Some("OK"));
}

#[tokio::test]
async fn test_list_problems_and_close_from_listing() {
    let server = MockServer::start().await;
    let problem = load_fixture("problems/get_problem.json");

    Mock::given(method("GET"))
        .and(path("/api/v2/problems"))
        .and(query_param("problemSelector", "status(\"open\")"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 1,
            "pageSize": 50,
            "problems": [problem]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/problems/-2038520447340442335_1700000000000V2/close"))
        .and(body_json(json!({"message": "fixed by rollback"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("problems/close_problem.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dt = test_client(&server.uri());
    let mut problems = dt.list_problems(&ProblemListOptions {
        problem_selector: Some("status(\"open\")".to_string()),
        ..Default::default()
    });

    let open = problems.fetch_all().await.unwrap().to_vec();
    assert_eq!(open.len(), 1);

    let result = open[0].close("fixed by rollback").await.unwrap();
    assert_eq!(result.closing, Some(true));
    assert_eq!(
        result.comment.and_then(|c| c.content),
        Some("fixed by rollback".to_string())
    );
}

#[tokio::test]
async fn test_get_problem_closed_has_end_time() {
    let server = MockServer::start().await;
    let mut problem = load_fixture("problems/get_problem.json");
    problem["status"] = json!("CLOSED");
    problem["endTime"] = json!(1700003600000i64);

    Mock::given(method("GET"))
        .and(path("/api/v2/problems/P-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&problem))
        .expect(1)
        .mount(&server)
        .await;

    let problem = test_client(&server.uri()).get_problem("P-1").await.unwrap();
    assert!(!problem.is_open());
    assert!(problem.end_time.is_some());
}
