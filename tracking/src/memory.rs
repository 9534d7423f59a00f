//! In-memory tracking store
//!
//! Keeps runs, datasets and logged models in mutex-guarded maps with the
//! same surface as the REST store. Backs the test suite and offline runs.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::Rng;

use crate::entities::{LoggedModel, Run, RunStatus, TrackedDataset};
use crate::error::{Result, TrackingError};
use crate::store::{DatasetProfile, LogModelRequest, TrackingStore};

#[derive(Default)]
struct State {
    runs: HashMap<String, Run>,
    datasets: HashMap<String, TrackedDataset>,
    models: HashMap<String, LoggedModel>,
}

/// An in-process stand-in for a remote tracking server
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> InMemoryStore {
        InMemoryStore::default()
    }
}

fn next_id(prefix: &str) -> String {
    format!("{}-{:016x}", prefix, rand::thread_rng().gen::<u64>())
}

#[async_trait]
impl TrackingStore for InMemoryStore {
    async fn create_run(&self, run_name: &str) -> Result<Run> {
        let run = Run {
            run_id: next_id("r"),
            run_name: run_name.to_string(),
            status: RunStatus::Running,
        };
        self.state
            .lock()
            .runs
            .insert(run.run_id.clone(), run.clone());
        Ok(run)
    }

    async fn get_run(&self, run_id: &str) -> Result<Run> {
        self.state
            .lock()
            .runs
            .get(run_id)
            .cloned()
            .ok_or_else(|| TrackingError::RunNotFound(run_id.to_string()))
    }

    async fn finish_run(&self, run_id: &str, status: RunStatus) -> Result<()> {
        let mut state = self.state.lock();
        let run = state
            .runs
            .get_mut(run_id)
            .ok_or_else(|| TrackingError::RunNotFound(run_id.to_string()))?;
        run.status = status;
        Ok(())
    }

    async fn register_dataset(&self, profile: DatasetProfile) -> Result<TrackedDataset> {
        let dataset = TrackedDataset {
            dataset_id: next_id("d"),
            name: profile.name,
            digest: profile.digest,
            num_rows: profile.num_rows,
            num_features: profile.num_features,
        };
        self.state
            .lock()
            .datasets
            .insert(dataset.dataset_id.clone(), dataset.clone());
        Ok(dataset)
    }

    async fn log_model(&self, request: LogModelRequest) -> Result<LoggedModel> {
        let mut state = self.state.lock();
        if !state.runs.contains_key(&request.run_id) {
            return Err(TrackingError::RunNotFound(request.run_id));
        }
        let model = LoggedModel {
            model_id: next_id("m"),
            run_id: request.run_id,
            name: request.name,
            params: request.params,
            metrics: BTreeMap::new(),
            artifact: request.artifact,
            input_example: request.input_example,
        };
        state.models.insert(model.model_id.clone(), model.clone());
        Ok(model)
    }

    async fn get_logged_model(&self, model_id: &str) -> Result<LoggedModel> {
        self.state
            .lock()
            .models
            .get(model_id)
            .cloned()
            .ok_or_else(|| TrackingError::ModelNotFound(model_id.to_string()))
    }

    async fn log_metrics(
        &self,
        model_id: &str,
        dataset_id: &str,
        metrics: &BTreeMap<String, f64>,
    ) -> Result<()> {
        let mut state = self.state.lock();
        if !state.datasets.contains_key(dataset_id) {
            return Err(TrackingError::DatasetNotFound(dataset_id.to_string()));
        }
        let model = state
            .models
            .get_mut(model_id)
            .ok_or_else(|| TrackingError::ModelNotFound(model_id.to_string()))?;
        model
            .metrics
            .extend(metrics.iter().map(|(k, v)| (k.clone(), *v)));
        Ok(())
    }
}
