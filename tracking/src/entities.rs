//! Wire-level records exchanged with the tracking service

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a tracking run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    Running,
    Finished,
    Failed,
}

/// A tracking-service record grouping one training execution's parameters,
/// artifacts and metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub run_id: String,
    pub run_name: String,
    pub status: RunStatus,
}

/// Server-side handle for a registered dataset
///
/// The record content itself stays with the client; the service keeps the
/// name, the content digest and the dimensions for metric linkage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedDataset {
    pub dataset_id: String,
    pub name: String,
    pub digest: String,
    pub num_rows: usize,
    pub num_features: usize,
}

/// The tracking service's persisted representation of a fitted estimator
/// plus its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedModel {
    pub model_id: String,
    pub run_id: String,
    pub name: String,
    pub params: BTreeMap<String, f64>,
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
    pub artifact: serde_json::Value,
    pub input_example: Vec<Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_status_uses_screaming_snake_case() {
        let encoded = serde_json::to_string(&RunStatus::Finished).unwrap();
        assert_eq!(encoded, "\"FINISHED\"");

        let decoded: RunStatus = serde_json::from_str("\"FAILED\"").unwrap();
        assert_eq!(decoded, RunStatus::Failed);
    }

    #[test]
    fn logged_model_round_trips_through_json() {
        let mut params = BTreeMap::new();
        params.insert("alpha".to_string(), 0.5);

        let model = LoggedModel {
            model_id: "m-0".to_string(),
            run_id: "r-0".to_string(),
            name: "elasticnet".to_string(),
            params,
            metrics: BTreeMap::new(),
            artifact: serde_json::json!({"coefficients": [0.1, 0.2]}),
            input_example: vec![vec![1.0, 2.0]],
        };

        let encoded = serde_json::to_string(&model).unwrap();
        let decoded: LoggedModel = serde_json::from_str(&encoded).unwrap();
        assert_eq!(model, decoded);
    }

    #[test]
    fn missing_metrics_field_decodes_as_empty() {
        let raw = r#"{
            "model_id": "m-1",
            "run_id": "r-1",
            "name": "elasticnet",
            "params": {},
            "artifact": null,
            "input_example": []
        }"#;

        let decoded: LoggedModel = serde_json::from_str(raw).unwrap();
        assert!(decoded.metrics.is_empty());
    }
}
