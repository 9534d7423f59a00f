//! Estimator traits
//!
//! Hyperparameter sets implement [`Fit`] and produce a fitted model; fitted
//! models implement [`Predict`]. Parameter validation happens inside `fit`
//! through [`ParamGuard`](crate::ParamGuard), so an invalid configuration
//! surfaces as the estimator's own error type.

use ndarray::{Array1, ArrayView2};

use crate::dataset::Dataset;

/// Fit a model to a dataset
pub trait Fit<O> {
    type Error: std::error::Error;

    fn fit(&self, dataset: &Dataset) -> std::result::Result<O, Self::Error>;
}

/// Predict target values for a feature matrix of shape `(n_samples, n_features)`
pub trait Predict {
    fn predict(&self, records: ArrayView2<f64>) -> Array1<f64>;
}
