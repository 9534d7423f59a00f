//! Linear regression with elastic net regularization for the fitlog
//! workspace.
//!
//! The estimator follows the workspace conventions: an unchecked builder-style
//! parameter set ([`ElasticNetParams`]), validated through
//! [`ParamGuard`](fitlog::ParamGuard) at fit time, producing a fitted
//! [`ElasticNet`] model that implements [`Predict`](fitlog::traits::Predict).
//! With the `serde` feature the fitted model serializes, which the tracking
//! layer uses to log model artifacts.

use ndarray::Array1;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

mod algorithm;
mod error;
mod hyperparams;

pub use error::{ElasticNetError, Result};
pub use hyperparams::{ElasticNetParams, ElasticNetValidParams};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
/// Elastic Net model
///
/// This struct contains the parameters of a fitted elastic net model: the
/// learned coefficients, (optionally) an intercept, the duality gap and the
/// number of steps needed in the computation.
///
/// ## Model implementation
///
/// The coordinate descent algorithm is used to solve the lasso and ridge
/// problem. It optimizes each coefficient separately, holding all the others
/// fixed. This cycles as long as the coefficients have not stabilized or the
/// maximum number of iterations is reached.
///
/// See also:
/// * [Talk on Fast Regularization Paths](https://web.stanford.edu/~hastie/TALKS/glmnet.pdf)
/// * [Regularization Paths for Generalized Linear Models via Coordinate
///   Descent](http://www.jstatsoft.org/v33/i01/paper)
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticNet {
    coefficients: Array1<f64>,
    intercept: f64,
    duality_gap: f64,
    n_steps: u32,
}

impl ElasticNet {
    /// Create a default parameter set for construction of an ElasticNet model
    ///
    /// By default, an intercept will be fitted. To disable fitting an
    /// intercept, call `.with_intercept(false)` before calling `.fit()`.
    pub fn params() -> ElasticNetParams {
        ElasticNetParams::new()
    }

    /// Create a ridge only model
    pub fn ridge() -> ElasticNetParams {
        ElasticNetParams::new().l1_ratio(0.0)
    }

    /// Create a LASSO only model
    pub fn lasso() -> ElasticNetParams {
        ElasticNetParams::new().l1_ratio(1.0)
    }
}
