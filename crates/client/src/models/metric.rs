//! Metric descriptors, query results and ingestion results (`/api/v2/metrics`).

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::common::ErrorDetail;
use crate::error::Result;
use crate::object::{DynatraceObject, ObjectContext, RawExt, RawMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationType {
    Auto,
    Avg,
    Count,
    Max,
    Median,
    Min,
    Percentile,
    Sum,
    Value,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricDefaultAggregation {
    pub aggregation_type: Option<AggregationType>,
    pub parameter: Option<f64>,
}

impl DynatraceObject for MetricDefaultAggregation {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            aggregation_type: raw.enumeration("type"),
            parameter: raw.f64("parameter"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricDimensionDefinition {
    pub key: Option<String>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub index: Option<i64>,
    pub dimension_type: Option<String>,
}

impl DynatraceObject for MetricDimensionDefinition {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            key: raw.str("key"),
            name: raw.str("name"),
            display_name: raw.str("displayName"),
            index: raw.i64("index"),
            dimension_type: raw.str("type"),
        })
    }
}

/// Metadata of one metric key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricDescriptor {
    pub metric_id: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub entity_type: Vec<String>,
    pub aggregation_types: Vec<AggregationType>,
    pub transformations: Vec<String>,
    pub default_aggregation: Option<MetricDefaultAggregation>,
    pub dimension_definitions: Vec<MetricDimensionDefinition>,
    pub tags: Vec<String>,
    pub created: Option<DateTime<Utc>>,
    pub last_written: Option<DateTime<Utc>>,
    pub ddu_billable: Option<bool>,
}

impl DynatraceObject for MetricDescriptor {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            metric_id: raw.str("metricId"),
            display_name: raw.str("displayName"),
            description: raw.str("description"),
            unit: raw.str("unit"),
            entity_type: raw.strings("entityType"),
            aggregation_types: raw.enumerations("aggregationTypes"),
            transformations: raw.strings("transformations"),
            default_aggregation: raw.nested("defaultAggregation", ctx)?,
            dimension_definitions: raw.list("dimensionDefinitions", ctx)?,
            tags: raw.strings("tags"),
            created: raw.timestamp("created"),
            last_written: raw.timestamp("lastWritten"),
            ddu_billable: raw.bool("dduBillable"),
        })
    }
}

/// One time series of a query result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSeries {
    pub dimensions: Vec<String>,
    pub dimension_map: BTreeMap<String, String>,
    pub timestamps: Vec<DateTime<Utc>>,
    /// One entry per timestamp; `None` where the series has no data.
    pub values: Vec<Option<f64>>,
}

impl DynatraceObject for MetricSeries {
    fn from_raw(raw: &RawMap, _ctx: &ObjectContext) -> Result<Self> {
        let timestamps = raw
            .value("timestamps")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_i64)
                    .filter_map(|ms| Utc.timestamp_millis_opt(ms).single())
                    .collect()
            })
            .unwrap_or_default();
        let values = raw
            .value("values")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(Value::as_f64).collect())
            .unwrap_or_default();

        Ok(Self {
            dimensions: raw.strings("dimensions"),
            dimension_map: raw.string_map("dimensionMap"),
            timestamps,
            values,
        })
    }
}

/// All series returned for one metric selector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSeriesCollection {
    pub metric_id: Option<String>,
    pub data: Vec<MetricSeries>,
    pub warnings: Vec<String>,
    pub data_point_count_ratio: Option<f64>,
    pub dimension_count_ratio: Option<f64>,
}

impl DynatraceObject for MetricSeriesCollection {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            metric_id: raw.str("metricId"),
            data: raw.list("data", ctx)?,
            warnings: raw.strings("warnings"),
            data_point_count_ratio: raw.f64("dataPointCountRatio"),
            dimension_count_ratio: raw.f64("dimensionCountRatio"),
        })
    }
}

/// Outcome of a line-protocol ingestion request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricIngestResult {
    pub lines_ok: Option<i64>,
    pub lines_invalid: Option<i64>,
    pub error: Option<ErrorDetail>,
}

impl DynatraceObject for MetricIngestResult {
    fn from_raw(raw: &RawMap, ctx: &ObjectContext) -> Result<Self> {
        Ok(Self {
            lines_ok: raw.i64("linesOk"),
            lines_invalid: raw.i64("linesInvalid"),
            error: raw.nested("error", ctx)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_series_keeps_null_values_aligned() {
        let raw = json!({
            "dimensions": ["HOST-1"],
            "dimensionMap": {"dt.entity.host": "HOST-1"},
            "timestamps": [1700000000000i64, 1700000060000i64, 1700000120000i64],
            "values": [1.5, null, 3.0]
        });
        let series = MetricSeries::construct(Some(&raw), &ObjectContext::detached()).unwrap();

        assert_eq!(series.timestamps.len(), 3);
        assert_eq!(series.values, vec![Some(1.5), None, Some(3.0)]);
        assert_eq!(series.dimension_map["dt.entity.host"], "HOST-1");
    }

    #[test]
    fn test_descriptor_aggregation_types() {
        let raw = json!({
            "metricId": "builtin:host.cpu.usage",
            "aggregationTypes": ["auto", "avg", "fancy", 3],
            "defaultAggregation": {"type": "avg"}
        });
        let descriptor =
            MetricDescriptor::construct(Some(&raw), &ObjectContext::detached()).unwrap();

        assert_eq!(
            descriptor.aggregation_types,
            vec![
                AggregationType::Auto,
                AggregationType::Avg,
                AggregationType::Unknown
            ]
        );
        assert_eq!(
            descriptor.default_aggregation.unwrap().aggregation_type,
            Some(AggregationType::Avg)
        );
    }
}
