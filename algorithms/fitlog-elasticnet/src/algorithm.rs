use approx::{abs_diff_eq, abs_diff_ne};
use ndarray::{s, Array1, ArrayView1, ArrayView2, Axis};

use fitlog::prelude::*;

use crate::{ElasticNet, ElasticNetError, ElasticNetParams};

impl Fit<ElasticNet> for ElasticNetParams {
    type Error = ElasticNetError;

    /// Fit an elastic net model to the given dataset
    ///
    /// The feature matrix must have shape `(n_samples, n_features)` and the
    /// target variable shape `(n_samples)`.
    ///
    /// Returns a fitted `ElasticNet` object which contains the learned
    /// coefficients and can be used to `predict` values of the target
    /// variable for new feature values.
    fn fit(&self, dataset: &Dataset) -> std::result::Result<ElasticNet, ElasticNetError> {
        let params = self.check_ref()?;

        if dataset.nsamples() == 0 {
            return Err(fitlog::Error::NotEnoughSamples.into());
        }
        if dataset.targets().len() != dataset.nsamples() {
            return Err(fitlog::Error::MismatchedSamples {
                records: dataset.nsamples(),
                targets: dataset.targets().len(),
            }
            .into());
        }

        let (intercept, y) = compute_intercept(params.with_intercept(), dataset.targets());
        let (coefficients, duality_gap, n_steps) = coordinate_descent(
            dataset.records(),
            y.view(),
            params.tolerance(),
            params.max_iterations(),
            params.l1_ratio(),
            params.alpha(),
        );

        Ok(ElasticNet {
            coefficients,
            intercept,
            duality_gap,
            n_steps,
        })
    }
}

impl Predict for ElasticNet {
    /// Given an input matrix `X`, with shape `(n_samples, n_features)`,
    /// `predict` returns the target variable according to the elastic net
    /// learned from the training data distribution.
    fn predict(&self, records: ArrayView2<f64>) -> Array1<f64> {
        records.dot(&self.coefficients) + self.intercept
    }
}

/// View the fitted coefficients and make predictions with a fitted elastic
/// net model
impl ElasticNet {
    /// Get the fitted coefficients
    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    /// Get the fitted intercept, 0. if no intercept was fitted
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get the number of steps taken in the optimization algorithm
    pub fn n_steps(&self) -> u32 {
        self.n_steps
    }

    /// Get the duality gap at the end of the optimization algorithm
    pub fn duality_gap(&self) -> f64 {
        self.duality_gap
    }
}

/// Compute the intercept as the target mean and center the target when an
/// intercept is requested, otherwise leave the target untouched
fn compute_intercept(with_intercept: bool, y: ArrayView1<f64>) -> (f64, Array1<f64>) {
    if with_intercept {
        let mean = y.mean().unwrap();
        (mean, &y - mean)
    } else {
        (0.0, y.to_owned())
    }
}

fn coordinate_descent(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    tol: f64,
    max_steps: u32,
    l1_ratio: f64,
    alpha: f64,
) -> (Array1<f64>, f64, u32) {
    let n_samples = x.nrows() as f64;
    let n_features = x.ncols();
    // the coefficients of the model
    let mut w = Array1::<f64>::zeros(n_features);
    // the residuals: `y - X*w` (since w=0, this is just `y` for now),
    // the residuals are updated during the algorithm as the coefficients change
    let mut r = y.to_owned();
    let mut n_steps = 0u32;
    let norm_cols_x = x.map_axis(Axis(0), |col| col.dot(&col));
    let mut gap = 1.0 + tol;
    let d_w_tol = tol;
    let tol = tol * y.dot(&y);
    while n_steps < max_steps {
        let mut w_max = 0.0;
        let mut d_w_max = 0.0;
        for ii in 0..n_features {
            if abs_diff_eq!(norm_cols_x[ii], 0.0) {
                continue;
            }
            let w_ii = w[ii];
            let x_slc: ArrayView1<f64> = x.slice(s![.., ii]);
            if abs_diff_ne!(w_ii, 0.0) {
                r += &(&x_slc * w_ii);
            }
            let tmp = x_slc.dot(&r);
            w[ii] = tmp.signum() * f64::max(tmp.abs() - n_samples * l1_ratio * alpha, 0.0)
                / (norm_cols_x[ii] + n_samples * (1.0 - l1_ratio) * alpha);
            if abs_diff_ne!(w[ii], 0.0) {
                r -= &(&x_slc * w[ii]);
            }
            let d_w_ii = (w[ii] - w_ii).abs();
            d_w_max = f64::max(d_w_max, d_w_ii);
            w_max = f64::max(w_max, w[ii].abs());
        }
        n_steps += 1;

        if n_steps == max_steps - 1 || abs_diff_eq!(w_max, 0.0) || d_w_max / w_max < d_w_tol {
            // We've hit one potential stopping criterion
            // check duality gap for ultimate stopping criterion
            gap = duality_gap(x, y, w.view(), r.view(), l1_ratio, alpha);
            if gap < tol {
                break;
            }
        }
    }
    (w, gap, n_steps)
}

fn duality_gap(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    w: ArrayView1<f64>,
    r: ArrayView1<f64>,
    l1_ratio: f64,
    alpha: f64,
) -> f64 {
    let n_samples = x.nrows() as f64;
    let l1_reg = l1_ratio * alpha * n_samples;
    let l2_reg = (1.0 - l1_ratio) * alpha * n_samples;
    let xta = x.t().dot(&r) - &w * l2_reg;

    let dual_norm_xta = xta.fold(0.0, |abs_max: f64, &x| abs_max.max(x.abs()));
    let r_norm2 = r.dot(&r);
    let w_norm2 = w.dot(&w);
    let (const_, mut gap) = if dual_norm_xta > l1_reg {
        let const_ = l1_reg / dual_norm_xta;
        let a_norm2 = r_norm2 * const_ * const_;
        (const_, 0.5 * (r_norm2 + a_norm2))
    } else {
        (1.0, r_norm2)
    };
    let l1_norm = w.fold(0.0, |sum, w_i| sum + w_i.abs());
    gap += l1_reg * l1_norm - const_ * r.dot(&y)
        + 0.5 * l2_reg * (1.0 + const_ * const_) * w_norm2;
    gap
}
