//! Tracking client facade
//!
//! [`TrackingClient`] is what pipelines talk to. It owns a
//! [`TrackingStore`] backend, adds the client-side glue (dataset digests,
//! model serialization, metric bundling) and provides the scoped-run
//! combinator that guarantees every run reaches a terminal state.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use ndarray::ArrayView2;
use rand::Rng;

use fitlog::metrics::RegressionReport;
use fitlog::Dataset;
use fitlog_elasticnet::ElasticNet;

use crate::config::TrackingConfig;
use crate::entities::{LoggedModel, Run, RunStatus, TrackedDataset};
use crate::error::Result;
use crate::memory::InMemoryStore;
use crate::rest::RestStore;
use crate::store::{DatasetProfile, LogModelRequest, TrackingStore};

/// Number of sample rows attached to a logged model as its input example
const INPUT_EXAMPLE_ROWS: usize = 5;

#[derive(Clone)]
pub struct TrackingClient {
    store: Arc<dyn TrackingStore>,
}

impl TrackingClient {
    /// Wrap an arbitrary store backend
    pub fn new(store: Arc<dyn TrackingStore>) -> TrackingClient {
        TrackingClient { store }
    }

    /// Connect to the remote tracking server selected by the configuration
    pub fn connect(config: &TrackingConfig) -> Result<TrackingClient> {
        Ok(TrackingClient::new(Arc::new(RestStore::connect(config)?)))
    }

    /// Client backed by an in-process store, for tests and offline use
    pub fn in_memory() -> TrackingClient {
        TrackingClient::new(Arc::new(InMemoryStore::new()))
    }

    /// Execute `body` within a tracking run
    ///
    /// The run is created first and finished on every exit path: FINISHED
    /// when the body returns `Ok`, FAILED when it returns `Err`. The body's
    /// outcome is returned either way.
    pub async fn within_run<T, F, Fut>(&self, run_name: &str, body: F) -> Result<T>
    where
        F: FnOnce(Run) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let run = self.store.create_run(run_name).await?;
        let outcome = body(run.clone()).await;

        let status = if outcome.is_ok() {
            RunStatus::Finished
        } else {
            RunStatus::Failed
        };
        self.store.finish_run(&run.run_id, status).await?;

        outcome
    }

    pub async fn get_run(&self, run_id: &str) -> Result<Run> {
        self.store.get_run(run_id).await
    }

    /// Register a dataset with the tracking service
    ///
    /// The rows themselves are not uploaded; the service receives the name,
    /// the dimensions and a crc32 digest of the record bytes.
    pub async fn register_dataset(&self, name: &str, dataset: &Dataset) -> Result<TrackedDataset> {
        let profile = DatasetProfile {
            name: name.to_string(),
            digest: records_digest(dataset.records()),
            num_rows: dataset.nsamples(),
            num_features: dataset.nfeatures(),
        };
        self.store.register_dataset(profile).await
    }

    /// Log a fitted model under the given run
    ///
    /// The estimator is serialized into the artifact field; the
    /// hyperparameter mapping and the first training rows travel alongside
    /// it as metadata.
    pub async fn log_model(
        &self,
        run: &Run,
        name: &str,
        model: &ElasticNet,
        params: BTreeMap<String, f64>,
        records: ArrayView2<'_, f64>,
    ) -> Result<LoggedModel> {
        let request = LogModelRequest {
            run_id: run.run_id.clone(),
            name: name.to_string(),
            params,
            artifact: serde_json::to_value(model)?,
            input_example: input_example(records),
        };
        self.store.log_model(request).await
    }

    pub async fn get_logged_model(&self, model_id: &str) -> Result<LoggedModel> {
        self.store.get_logged_model(model_id).await
    }

    /// Attach the metric triple to a logged model, linked to its training
    /// dataset
    pub async fn log_metrics(
        &self,
        model: &LoggedModel,
        dataset: &TrackedDataset,
        report: &RegressionReport,
    ) -> Result<()> {
        let mut metrics = BTreeMap::new();
        metrics.insert("rmse".to_string(), report.rmse);
        metrics.insert("mae".to_string(), report.mae);
        metrics.insert("r2".to_string(), report.r2);

        self.store
            .log_metrics(&model.model_id, &dataset.dataset_id, &metrics)
            .await
    }
}

/// Generate a unique run name: `run-` followed by 128 random bits in hex
pub fn generate_run_name() -> String {
    format!("run-{:032x}", rand::thread_rng().gen::<u128>())
}

fn records_digest(records: ArrayView2<f64>) -> String {
    let mut hasher = crc32fast::Hasher::new();
    for x in records.iter() {
        hasher.update(&x.to_le_bytes());
    }
    format!("{:08x}", hasher.finalize())
}

fn input_example(records: ArrayView2<f64>) -> Vec<Vec<f64>> {
    records
        .outer_iter()
        .take(INPUT_EXAMPLE_ROWS)
        .map(|row| row.to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn digest_is_stable_for_equal_records() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(records_digest(a.view()), records_digest(b.view()));
    }

    #[test]
    fn digest_differs_for_different_records() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![[1.0, 2.0], [3.0, 4.5]];
        assert_ne!(records_digest(a.view()), records_digest(b.view()));
    }

    #[test]
    fn input_example_is_capped_at_five_rows() {
        let records = ndarray::Array2::<f64>::zeros((10, 4));
        let example = input_example(records.view());
        assert_eq!(example.len(), 5);
        assert_eq!(example[0].len(), 4);

        let records = ndarray::Array2::<f64>::zeros((3, 4));
        assert_eq!(input_example(records.view()).len(), 3);
    }

    #[test]
    fn run_names_carry_the_expected_prefix() {
        let first = generate_run_name();
        let second = generate_run_name();

        assert!(first.starts_with("run-"));
        assert_eq!(first.len(), "run-".len() + 32);
        assert_ne!(first, second);
    }
}
