//! Settings 2.0, Extensions 2.0 and audit log endpoint tests.

mod common;

use common::*;
use dynatrace_client::RawMap;
use dynatrace_client::endpoints::{AuditLogListOptions, SettingsListOptions};
use dynatrace_client::models::{AuditEventType, SettingsObjectCreate};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};

#[tokio::test]
async fn test_list_settings_objects_by_schema() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/settings/objects"))
        .and(query_param("schemaIds", "builtin:alerting.profile,builtin:alerting.maintenance-window"))
        .and(query_param("scopes", "environment"))
        .and(query_param("fields", "objectId,value,updateToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 1,
            "pageSize": 100,
            "items": [{
                "objectId": "vu9U3hXa3q0AAAABABdidWlsdGluOmFsZXJ0aW5nLnByb2ZpbGU",
                "updateToken": "vu9U3hXY3q0ATAAkABdidWls",
                "value": {"name": "Default", "severityRules": []}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dt = test_client(&server.uri());
    let mut objects = dt.list_settings_objects(&SettingsListOptions {
        schema_ids: vec![
            "builtin:alerting.profile".to_string(),
            "builtin:alerting.maintenance-window".to_string(),
        ],
        scopes: vec!["environment".to_string()],
        fields: Some("objectId,value,updateToken".to_string()),
        ..Default::default()
    });

    let all = objects.fetch_all().await.unwrap();
    assert_eq!(all[0].value["name"], "Default");
    assert_eq!(all[0].update_token.as_deref(), Some("vu9U3hXY3q0ATAAkABdidWls"));
}

#[tokio::test]
async fn test_create_settings_objects_reports_per_item() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/settings/objects"))
        .and(query_param("validateOnly", "true"))
        .and(body_json(json!([
            {"schemaId": "builtin:alerting.profile", "scope": "environment", "value": {"name": "Team A"}},
            {"schemaId": "builtin:alerting.profile", "scope": "environment", "value": {"name": ""}}
        ])))
        .respond_with(
            ResponseTemplate::new(207).set_body_json(load_fixture("settings/create_response.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let create = |name: &str| {
        let mut value = RawMap::new();
        value.insert("name".to_string(), json!(name));
        SettingsObjectCreate {
            schema_id: "builtin:alerting.profile".to_string(),
            scope: "environment".to_string(),
            value,
            ..Default::default()
        }
    };

    let responses = test_client(&server.uri())
        .create_settings_objects(&[create("Team A"), create("")], true)
        .await
        .unwrap();

    assert_eq!(responses.len(), 2);
    assert!(responses[0].is_success());
    assert!(!responses[1].is_success());
    let error = responses[1].error.as_ref().unwrap();
    assert_eq!(error.constraint_violations[0].path.as_deref(), Some("name"));
    assert_eq!(responses[1].invalid_value, Some(json!({"name": ""})));
}

#[tokio::test]
async fn test_create_settings_objects_rejects_non_array() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/settings/objects"))
        .and(query_param_is_missing("validateOnly"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .create_settings_objects(&[], false)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_update_settings_object_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/settings/objects/abc"))
        .and(body_json(json!({"value": {"enabled": true}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200, "objectId": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut value = RawMap::new();
    value.insert("enabled".to_string(), json!(true));
    let response = test_client(&server.uri())
        .update_settings_object("abc", value, None)
        .await
        .unwrap();
    assert_eq!(response.object_id.as_deref(), Some("abc"));
}

#[tokio::test]
async fn test_list_extensions_then_versions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/extensions"))
        .and(query_param("name", "snmp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 1,
            "extensions": [{"extensionName": "com.dynatrace.extension.snmp-generic", "version": "1.0.2"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/extensions/com.dynatrace.extension.snmp-generic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 2,
            "extensions": [
                {"extensionName": "com.dynatrace.extension.snmp-generic", "version": "1.0.1"},
                {"extensionName": "com.dynatrace.extension.snmp-generic", "version": "1.0.2"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dt = test_client(&server.uri());
    let mut extensions = dt.list_extensions(Some("snmp"), None);
    let name = extensions.fetch_all().await.unwrap()[0]
        .extension_name
        .clone()
        .unwrap();

    let mut versions = dt.list_extension_versions(&name, None);
    let versions: Vec<_> = versions
        .fetch_all()
        .await
        .unwrap()
        .iter()
        .filter_map(|e| e.version.clone())
        .collect();
    assert_eq!(versions, vec!["1.0.1", "1.0.2"]);
}

#[tokio::test]
async fn test_list_audit_logs() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/auditlogs"))
        .and(query_param("filter", "category(\"CONFIG\")"))
        .and(query_param("from", "now-1d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalCount": 1,
            "pageSize": 100,
            "auditLogs": [{
                "logId": "169999999999900000",
                "eventType": "UPDATE",
                "category": "CONFIG",
                "user": "ops@example.com",
                "timestamp": 1700000000000i64,
                "success": true
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/auditlogs/169999999999900000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "logId": "169999999999900000",
            "eventType": "UPDATE"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dt = test_client(&server.uri());
    let mut logs = dt.list_audit_logs(&AuditLogListOptions {
        filter: Some("category(\"CONFIG\")".to_string()),
        from: Some("now-1d".to_string()),
        ..Default::default()
    });
    let entry = logs.get(0).await.unwrap().cloned().unwrap();
    assert_eq!(entry.event_type, Some(AuditEventType::Update));

    let fetched = dt
        .get_audit_log(entry.log_id.as_deref().unwrap())
        .await
        .unwrap();
    assert_eq!(fetched.log_id, entry.log_id);
}
