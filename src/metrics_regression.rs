//! Common metrics for regression
//!
//! This module implements common comparison metrics for continuous variables.

use ndarray::prelude::*;
use ndarray::Data;

/// Regression metrics trait
///
/// `self` holds the predictions, the argument the ground truth:
/// ```ignore
/// prediction.r2(&ground_truth)
/// ```
/// A length mismatch between the two sequences propagates as the underlying
/// `ndarray` shape panic.
pub trait Regression<Rhs = Self> {
    /// Mean absolute error between two continuous variables
    fn mean_absolute_error(&self, compare_to: &Rhs) -> f64;
    /// Mean squared error between two continuous variables
    fn mean_squared_error(&self, compare_to: &Rhs) -> f64;
    /// Square root of the mean squared error
    fn root_mean_squared_error(&self, compare_to: &Rhs) -> f64;
    /// R squared coefficient, the proportion of the variance in the dependent
    /// variable that is predictable from the independent variable
    fn r2(&self, compare_to: &Rhs) -> f64;
}

impl<D: Data<Elem = f64>, D2: Data<Elem = f64>> Regression<ArrayBase<D2, Ix1>>
    for ArrayBase<D, Ix1>
{
    fn mean_absolute_error(&self, compare_to: &ArrayBase<D2, Ix1>) -> f64 {
        (self - compare_to).mapv(f64::abs).mean().unwrap()
    }

    fn mean_squared_error(&self, compare_to: &ArrayBase<D2, Ix1>) -> f64 {
        (self - compare_to).mapv(|x| x * x).mean().unwrap()
    }

    fn root_mean_squared_error(&self, compare_to: &ArrayBase<D2, Ix1>) -> f64 {
        self.mean_squared_error(compare_to).sqrt()
    }

    // r2 = 1 - sum((pred_i - y_i)^2)/sum((mean_y - y_i)^2)
    // the mean and the variance in the denominator belong to `compare_to`
    fn r2(&self, compare_to: &ArrayBase<D2, Ix1>) -> f64 {
        let mean = compare_to.mean().unwrap();

        1.0 - (self - compare_to).mapv(|x| x * x).sum()
            / (compare_to.mapv(|x| (x - mean) * (x - mean)).sum() + 1e-10)
    }
}

/// The metric triple attached to a logged model
///
/// Computed once from predictions against the ground truth and bundled so the
/// tracking layer can log all three values as one mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionReport {
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
}

impl RegressionReport {
    /// Compare predictions against the ground truth
    pub fn new(prediction: ArrayView1<f64>, ground_truth: ArrayView1<f64>) -> RegressionReport {
        RegressionReport {
            rmse: prediction.root_mean_squared_error(&ground_truth),
            mae: prediction.mean_absolute_error(&ground_truth),
            r2: prediction.r2(&ground_truth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Regression, RegressionReport};
    use approx::assert_abs_diff_eq;
    use ndarray::prelude::*;

    #[test]
    fn test_same() {
        let a: Array1<f64> = Array1::ones(100);

        assert_abs_diff_eq!(a.mean_absolute_error(&a), 0.0);
        assert_abs_diff_eq!(a.mean_squared_error(&a), 0.0);
        assert_abs_diff_eq!(a.root_mean_squared_error(&a), 0.0);
        assert_abs_diff_eq!(a.r2(&a), 1.0);
    }

    #[test]
    fn test_mean_squared_error() {
        let a = array![0.0, 0.1, 0.2, 0.3, 0.4];
        let b = array![0.1, 0.2, 0.3, 0.4, 0.5];

        assert_abs_diff_eq!(a.mean_squared_error(&b), 0.01, epsilon = 1e-5);
        assert_abs_diff_eq!(a.root_mean_squared_error(&b), 0.1, epsilon = 1e-5);
        assert_abs_diff_eq!(a.mean_absolute_error(&b), 0.1, epsilon = 1e-5);
    }

    #[test]
    fn test_r2() {
        let prediction = array![0.1, 0.3, 0.2, 0.5, 0.7];
        let truth = array![0.0, 0.1, 0.2, 0.3, 0.4];

        assert_abs_diff_eq!(prediction.r2(&truth), -0.8, epsilon = 1e-5);
    }

    #[test]
    fn report_bundles_the_three_metrics() {
        let prediction = array![0.1, 0.2, 0.3, 0.4, 0.5];
        let truth = array![0.0, 0.1, 0.2, 0.3, 0.4];

        let report = RegressionReport::new(prediction.view(), truth.view());
        assert_abs_diff_eq!(report.rmse, 0.1, epsilon = 1e-5);
        assert_abs_diff_eq!(report.mae, 0.1, epsilon = 1e-5);
        assert_abs_diff_eq!(report.r2, prediction.r2(&truth), epsilon = 1e-12);

        // rmse is non-negative and r2 bounded by one for any inputs
        assert!(report.rmse >= 0.0);
        assert!(report.r2 <= 1.0);
    }
}
