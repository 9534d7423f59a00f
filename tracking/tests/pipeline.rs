//! End-to-end properties of the demo pipeline, run against the in-memory
//! store.

use std::cell::RefCell;

use approx::assert_abs_diff_eq;

use fitlog_tracking::pipeline::{train_and_track, ALPHA, L1_RATIO};
use fitlog_tracking::{RunStatus, TrackingClient, TrackingError};

#[tokio::test]
async fn demo_run_records_model_and_metrics() {
    let client = TrackingClient::in_memory();
    let report = train_and_track(&client).await.unwrap();

    // deterministic 80/20 partition of the 150 iris samples
    assert_eq!(report.train_samples, 120);
    assert_eq!(report.test_samples, 30);

    // the first read-back returns the hyperparameters that were logged,
    // and no metrics yet
    assert_abs_diff_eq!(report.logged_model.params["alpha"], ALPHA);
    assert_abs_diff_eq!(report.logged_model.params["l1_ratio"], L1_RATIO);
    assert!(report.logged_model.metrics.is_empty());
    assert_eq!(report.logged_model.name, "elasticnet");
    assert_eq!(report.logged_model.input_example.len(), 5);
    assert_eq!(report.logged_model.input_example[0].len(), 4);

    // the second read-back returns the locally computed metric values
    let metrics = &report.updated_model.metrics;
    for key in ["rmse", "mae", "r2"].iter() {
        assert!(metrics[*key].is_finite());
    }
    assert_abs_diff_eq!(metrics["rmse"], report.metrics.rmse, epsilon = 1e-12);
    assert_abs_diff_eq!(metrics["mae"], report.metrics.mae, epsilon = 1e-12);
    assert_abs_diff_eq!(metrics["r2"], report.metrics.r2, epsilon = 1e-12);
    assert!(report.metrics.rmse >= 0.0);
    assert!(report.metrics.r2 <= 1.0);

    // both read-backs refer to the same logged model under the same run
    assert_eq!(report.logged_model.model_id, report.updated_model.model_id);
    assert_eq!(report.logged_model.run_id, report.run.run_id);
    assert!(report.run.run_name.starts_with("run-"));

    // the run context was closed on the way out
    let run = client.get_run(&report.run.run_id).await.unwrap();
    assert_eq!(run.status, RunStatus::Finished);
}

#[tokio::test]
async fn repeated_runs_are_deterministic() {
    let first = train_and_track(&TrackingClient::in_memory()).await.unwrap();
    let second = train_and_track(&TrackingClient::in_memory()).await.unwrap();

    // fixed seed and hyperparameters: identical coefficients and metrics
    assert_eq!(first.updated_model.artifact, second.updated_model.artifact);
    assert_eq!(first.updated_model.metrics, second.updated_model.metrics);
    assert_eq!(
        first.logged_model.input_example,
        second.logged_model.input_example
    );
}

#[tokio::test]
async fn failing_run_body_marks_the_run_failed() {
    let client = TrackingClient::in_memory();
    let run_id = RefCell::new(String::new());

    let outcome = client
        .within_run("run-doomed", |run| {
            *run_id.borrow_mut() = run.run_id.clone();
            async move { Err::<(), TrackingError>(TrackingError::ModelNotFound("m-0".into())) }
        })
        .await;

    assert!(outcome.is_err());

    let run_id = run_id.borrow().clone();
    let run = client.get_run(&run_id).await.unwrap();
    assert_eq!(run.status, RunStatus::Failed);
}
