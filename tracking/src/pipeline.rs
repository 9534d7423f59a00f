//! Demo training-and-logging pipeline
//!
//! A straight-line sequence with hard-coded constants and no branching:
//! load iris, derive a binary label, split, fit an elastic net, and record
//! the run, the model and the metrics with the tracking service. Any failed
//! step aborts the sequence through `?`; there is no retry or rollback.

use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;

use fitlog::metrics::RegressionReport;
use fitlog::traits::{Fit, Predict};
use fitlog_elasticnet::ElasticNet;

use crate::client::{generate_run_name, TrackingClient};
use crate::entities::{LoggedModel, Run};
use crate::error::Result;

/// Fraction of samples assigned to the training partition
pub const TRAIN_RATIO: f32 = 0.8;
/// Seed for the shuffle preceding the split
pub const SEED: u64 = 42;
/// Overall penalty weight of the elastic net
pub const ALPHA: f64 = 0.5;
/// Distribution of the penalty between L1 and L2 regularization
pub const L1_RATIO: f64 = 0.5;

/// Everything the demo run produced, for printing and assertions
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub run: Run,
    /// Logged model as read back right after model logging, without metrics
    pub logged_model: LoggedModel,
    /// Logged model as read back again after metric logging
    pub updated_model: LoggedModel,
    /// The metric triple as computed locally
    pub metrics: RegressionReport,
    pub train_samples: usize,
    pub test_samples: usize,
}

/// Train an elastic net on iris and record the run with the tracking service
///
/// The sequence: derive the binary label, shuffle with the fixed seed and
/// split 80/20, then within a freshly named run register the training
/// dataset, fit the model, log it with its hyperparameters, read it back,
/// compute (rmse, mae, r2) on the training partition, log the metrics
/// against the model and the dataset, and read the model back once more.
pub async fn train_and_track(client: &TrackingClient) -> Result<TrainingReport> {
    // Binary label in place of the species code: 1.0 for virginica
    let dataset = fitlog_datasets::iris().map_targets(|species| {
        if species == 2.0 {
            1.0
        } else {
            0.0
        }
    });

    let mut rng = SmallRng::seed_from_u64(SEED);
    let (train, test) = dataset.shuffle(&mut rng).split_with_ratio(TRAIN_RATIO);
    let (train_samples, test_samples) = (train.nsamples(), test.nsamples());
    info!(train_samples, test_samples, "partitioned dataset");

    let run_name = generate_run_name();
    client
        .within_run(&run_name, |run| async move {
            // Training metrics are linked to this dataset record below
            let train_dataset = client.register_dataset("train", &train).await?;

            let model = ElasticNet::params()
                .alpha(ALPHA)
                .l1_ratio(L1_RATIO)
                .fit(&train)?;

            let mut params = BTreeMap::new();
            params.insert("alpha".to_string(), ALPHA);
            params.insert("l1_ratio".to_string(), L1_RATIO);

            let model_info = client
                .log_model(&run, "elasticnet", &model, params, train.records())
                .await?;

            // Inspect the logged model and its properties
            let logged_model = client.get_logged_model(&model_info.model_id).await?;

            // Evaluate the model on the training dataset and log the metrics
            // against the logged model and the registered dataset
            let predictions = model.predict(train.records());
            let metrics = RegressionReport::new(predictions.view(), train.targets());
            client
                .log_metrics(&logged_model, &train_dataset, &metrics)
                .await?;

            // Inspect the logged model again, now with metrics attached
            let updated_model = client.get_logged_model(&model_info.model_id).await?;
            info!(model_id = %updated_model.model_id, "run recorded");

            Ok(TrainingReport {
                run,
                logged_model,
                updated_model,
                metrics,
                train_samples,
                test_samples,
            })
        })
        .await
}
