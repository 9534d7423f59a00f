//! `fitlog` is the shared core for small classical-ML pipelines whose runs
//! are recorded with an experiment tracker.
//!
//! The crate keeps the surface deliberately small: an in-memory tabular
//! [`Dataset`] with seeded shuffling and ratio splitting, regression metrics,
//! and the [`Fit`](traits::Fit)/[`Predict`](traits::Predict) seams that
//! estimator crates implement. Everything is `f64`; records are `ndarray`
//! matrices with one numeric target per sample.
//!
//! Estimators live in their own workspace members (see `fitlog-elasticnet`),
//! datasets in `fitlog-datasets`, and the tracking client plus the demo
//! pipeline in `fitlog-tracking`.

pub mod dataset;
pub mod error;
mod metrics_regression;
pub mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use param_guard::ParamGuard;

/// Common metrics for regression tasks
pub mod metrics {
    pub use crate::metrics_regression::{Regression, RegressionReport};
}
