//! Property-based tests for the object mapper.
//!
//! # Invariants
//! - Construction from any JSON value succeeds for models without required keys
//! - Request models reproduce themselves through `to_raw` and `construct`

use dynatrace_client::models::{
    ApiTokenCreate, AuditLogEntry, Entity, Event, Extension, Host, MetricDescriptor,
    MetricSeriesCollection, Problem, SettingsObject, SettingsObjectCreate,
};
use dynatrace_client::testing::generators::proptest_strategies::{
    json_value_strategy, raw_object_strategy,
};
use dynatrace_client::{DynatraceObject, ObjectContext, RawMap, ToRaw};
use proptest::prelude::*;
use serde_json::Value;

fn construct_all_models(value: &Value) {
    let ctx = ObjectContext::detached();
    Entity::construct(Some(value), &ctx).unwrap();
    Problem::construct(Some(value), &ctx).unwrap();
    Event::construct(Some(value), &ctx).unwrap();
    MetricDescriptor::construct(Some(value), &ctx).unwrap();
    MetricSeriesCollection::construct(Some(value), &ctx).unwrap();
    AuditLogEntry::construct(Some(value), &ctx).unwrap();
    Extension::construct(Some(value), &ctx).unwrap();
    SettingsObject::construct(Some(value), &ctx).unwrap();
    Host::construct(Some(value), &ctx).unwrap();
}

proptest! {
    #[test]
    fn test_construction_is_total_for_any_value(value in json_value_strategy()) {
        construct_all_models(&value);
    }

    #[test]
    fn test_construction_is_total_for_known_keys(raw in raw_object_strategy()) {
        construct_all_models(&Value::Object(raw));
    }

    #[test]
    fn test_raw_map_is_identity(raw in raw_object_strategy()) {
        let built = RawMap::construct(Some(&Value::Object(raw.clone())), &ObjectContext::detached()).unwrap();
        prop_assert_eq!(built, raw);
    }

    #[test]
    fn test_token_request_round_trip(
        name in "[a-zA-Z0-9 _-]{1,40}",
        scopes in prop::collection::vec("[a-zA-Z.]{3,24}", 0..5),
        expiration in prop::option::of("now\\+[0-9]{1,3}d"),
        personal in prop::option::of(any::<bool>()),
    ) {
        let token = ApiTokenCreate {
            name,
            scopes,
            expiration_date: expiration,
            personal_access_token: personal,
        };
        let raw = Value::Object(token.to_raw().unwrap());
        let rebuilt = ApiTokenCreate::construct(Some(&raw), &ObjectContext::detached()).unwrap();
        prop_assert_eq!(rebuilt, token);
    }

    #[test]
    fn test_settings_request_round_trip(
        schema_id in "builtin:[a-z.-]{1,30}",
        scope in prop_oneof![Just("environment".to_string()), "HOST-[0-9A-F]{16}"],
        external_id in prop::option::of("[a-z0-9-]{1,16}"),
        value in raw_object_strategy(),
    ) {
        let create = SettingsObjectCreate {
            schema_id,
            schema_version: None,
            scope,
            external_id,
            insert_after: None,
            value,
        };
        let raw = Value::Object(create.to_raw().unwrap());
        let rebuilt = SettingsObjectCreate::construct(Some(&raw), &ObjectContext::detached()).unwrap();
        prop_assert_eq!(rebuilt, create);
    }
}
