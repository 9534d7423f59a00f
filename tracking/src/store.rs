//! Backend seam of the tracking client
//!
//! The trait mirrors the operations the pipeline needs from a tracking
//! service: run lifecycle, dataset registration, model logging with
//! read-back, and metric logging. `rest::RestStore` forwards them to a
//! remote server; `memory::InMemoryStore` keeps them in process.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::entities::{LoggedModel, Run, RunStatus, TrackedDataset};
use crate::error::Result;

/// Client-side description of a dataset to register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetProfile {
    pub name: String,
    pub digest: String,
    pub num_rows: usize,
    pub num_features: usize,
}

/// Everything needed to create a logged-model record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogModelRequest {
    pub run_id: String,
    pub name: String,
    pub params: BTreeMap<String, f64>,
    pub artifact: serde_json::Value,
    pub input_example: Vec<Vec<f64>>,
}

#[async_trait]
pub trait TrackingStore: Send + Sync {
    /// Open a new run in RUNNING state
    async fn create_run(&self, run_name: &str) -> Result<Run>;

    /// Fetch a run by id
    async fn get_run(&self, run_id: &str) -> Result<Run>;

    /// Move a run to its terminal state
    async fn finish_run(&self, run_id: &str, status: RunStatus) -> Result<()>;

    /// Register a dataset and return its service-side handle
    async fn register_dataset(&self, profile: DatasetProfile) -> Result<TrackedDataset>;

    /// Persist a fitted model under a run
    async fn log_model(&self, request: LogModelRequest) -> Result<LoggedModel>;

    /// Fetch a logged model by id
    async fn get_logged_model(&self, model_id: &str) -> Result<LoggedModel>;

    /// Attach metric values to a logged model, linked to a dataset
    async fn log_metrics(
        &self,
        model_id: &str,
        dataset_id: &str,
        metrics: &BTreeMap<String, f64>,
    ) -> Result<()>;
}
