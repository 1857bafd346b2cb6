use serde::Serialize;

use super::entity::QueueBacklog;

pub const METRIC_NAME: &str = "BacklogPerTask";
pub const METRIC_UNIT: &str = "Count";
pub const DIMENSION_NAME: &str = "QueueName";

/// One embedded-metric-format line. The `_aws` block declares the metric,
/// its unit, namespace and dimension; the flat `QueueName` and
/// `BacklogPerTask` fields carry the values the declaration resolves
/// against. The log pipeline scraping stdout extracts the metric from this
/// shape without a separate metrics API call.
#[derive(Debug, Serialize)]
pub struct MetricDocument<'a> {
    #[serde(rename = "_aws")]
    pub metadata: Metadata<'a>,
    #[serde(rename = "QueueName")]
    pub queue_name: &'a str,
    #[serde(rename = "BacklogPerTask")]
    pub backlog_per_task: u64,
}

#[derive(Debug, Serialize)]
pub struct Metadata<'a> {
    #[serde(rename = "Timestamp")]
    pub timestamp: i64,
    #[serde(rename = "CloudWatchMetrics")]
    pub metrics: [MetricDirective<'a>; 1],
}

#[derive(Debug, Serialize)]
pub struct MetricDirective<'a> {
    #[serde(rename = "Namespace")]
    pub namespace: &'a str,
    #[serde(rename = "Dimensions")]
    pub dimensions: [[&'static str; 1]; 1],
    #[serde(rename = "Metrics")]
    pub metrics: [MetricDefinition; 1],
}

#[derive(Debug, Serialize)]
pub struct MetricDefinition {
    #[serde(rename = "Name")]
    pub name: &'static str,
    #[serde(rename = "Unit")]
    pub unit: &'static str,
}

impl<'a> MetricDocument<'a> {
    pub fn new(namespace: &'a str, timestamp_millis: i64, backlog: &'a QueueBacklog) -> Self {
        Self {
            metadata: Metadata {
                timestamp: timestamp_millis,
                metrics: [MetricDirective {
                    namespace,
                    dimensions: [[DIMENSION_NAME]],
                    metrics: [MetricDefinition {
                        name: METRIC_NAME,
                        unit: METRIC_UNIT,
                    }],
                }],
            },
            queue_name: &backlog.queue_name,
            backlog_per_task: backlog.backlog_per_task,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::MetricDocument;
    use crate::domain::entity::QueueBacklog;

    #[test]
    fn serializes_to_the_embedded_metric_format() {
        let backlog = QueueBacklog {
            queue_name: "orders".to_string(),
            backlog_per_task: 4,
        };

        let doc = MetricDocument::new("MyService", 1_700_000_000_000, &backlog);

        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "_aws": {
                    "Timestamp": 1_700_000_000_000_i64,
                    "CloudWatchMetrics": [{
                        "Namespace": "MyService",
                        "Dimensions": [["QueueName"]],
                        "Metrics": [{"Name": "BacklogPerTask", "Unit": "Count"}]
                    }]
                },
                "QueueName": "orders",
                "BacklogPerTask": 4
            })
        );
    }

    #[test]
    fn dimension_name_matches_the_top_level_field() {
        let backlog = QueueBacklog {
            queue_name: "orders".to_string(),
            backlog_per_task: 0,
        };

        let value = serde_json::to_value(MetricDocument::new("NS", 0, &backlog)).unwrap();
        let dimension = &value["_aws"]["CloudWatchMetrics"][0]["Dimensions"][0][0];

        assert!(value
            .as_object()
            .unwrap()
            .contains_key(dimension.as_str().unwrap()));
    }
}
