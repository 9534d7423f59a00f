#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use fitlog::ParamGuard;

use crate::error::ElasticNetError;

use super::Result;

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
/// A verified hyperparameter set ready for the estimation of an elastic net
/// regression model
///
/// See [`ElasticNetParams`] for more information.
#[derive(Clone, Debug, PartialEq)]
pub struct ElasticNetValidParams {
    alpha: f64,
    l1_ratio: f64,
    with_intercept: bool,
    max_iterations: u32,
    tolerance: f64,
}

impl ElasticNetValidParams {
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn l1_ratio(&self) -> f64 {
        self.l1_ratio
    }

    pub fn with_intercept(&self) -> bool {
        self.with_intercept
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}

/// A hyperparameter set for Elastic-Net
///
/// Configures and minimizes the following objective function:
/// ```ignore
/// 1 / (2 * n_samples) * ||y - Xw||^2_2
///     + alpha * l1_ratio * ||w||_1
///     + 0.5 * alpha * (1 - l1_ratio) * ||w||^2_2
/// ```
///
/// The parameter set can be verified into an [`ElasticNetValidParams`] by
/// calling [ParamGuard::check](Self::check). It is also possible to directly
/// fit a model with [Fit::fit](fitlog::traits::Fit::fit), which implicitly
/// verifies the parameter set prior to the model estimation and forwards any
/// error.
///
/// # Parameters
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :---| :--- |
/// | [alpha](Self::alpha) | `1.0` | Overall penalty weight | `[0, inf)` |
/// | [l1_ratio](Self::l1_ratio) | `0.5` | Distribution of penalty to L1 and L2 regularizations | `[0.0, 1.0]` |
/// | [with_intercept](Self::with_intercept) | `true` | Enable intercept | `false`, `true` |
/// | [tolerance](Self::tolerance) | `1e-4` | Absolute change of any of the coefficients | `(0, inf)` |
/// | [max_iterations](Self::max_iterations) | `1000` | Maximum number of iterations | `[1, inf)` |
///
/// # Errors
///
/// The following errors can come from invalid hyperparameters:
///
/// Returns [`InvalidAlpha`](ElasticNetError::InvalidAlpha) if alpha is
/// negative.
///
/// Returns [`InvalidL1Ratio`](ElasticNetError::InvalidL1Ratio) if the L1
/// ratio is not in unit range.
///
/// Returns [`InvalidTolerance`](ElasticNetError::InvalidTolerance) if the
/// tolerance is not positive.
///
/// # Example
///
/// ```rust
/// use fitlog::prelude::*;
/// use fitlog_elasticnet::{ElasticNet, ElasticNetError};
/// use ndarray::array;
///
/// let ds = Dataset::new(array![[1.0, 0.0], [0.0, 1.0]], array![3.0, 2.0]);
///
/// // create a new parameter set with alpha equal to `1e-5`
/// let unchecked_params = ElasticNet::params()
///     .alpha(1e-5);
///
/// // fit a model with the unchecked parameter set
/// let model = unchecked_params.fit(&ds)?;
///
/// // transform into a verified parameter set
/// let checked_params = unchecked_params.check()?;
/// # Ok::<(), ElasticNetError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ElasticNetParams(ElasticNetValidParams);

impl Default for ElasticNetParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit an Elastic Net model
impl ElasticNetParams {
    /// Create default elastic net hyperparameters
    ///
    /// By default, an intercept will be fitted. To disable fitting an
    /// intercept, call `.with_intercept(false)` before calling `.fit()`.
    pub fn new() -> ElasticNetParams {
        Self(ElasticNetValidParams {
            alpha: 1.0,
            l1_ratio: 0.5,
            with_intercept: true,
            max_iterations: 1000,
            tolerance: 1e-4,
        })
    }

    /// Set the overall penalty weight of the elastic net. Use `l1_ratio` to
    /// configure how the penalty is distributed to L1 and L2 regularization.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.0.alpha = alpha;
        self
    }

    /// Set the l1_ratio parameter of the elastic net. Controls how the
    /// penalty is distributed to L1 and L2 regularization.
    /// Setting `l1_ratio` to 1.0 is equivalent to a "Lasso" penalization,
    /// setting it to 0.0 is equivalent to "Ridge" penalization.
    ///
    /// Defaults to `0.5` if not set
    ///
    /// `l1_ratio` must be between `0.0` and `1.0`.
    pub fn l1_ratio(mut self, l1_ratio: f64) -> Self {
        self.0.l1_ratio = l1_ratio;
        self
    }

    /// Configure the elastic net model to fit an intercept.
    /// Defaults to `true` if not set.
    pub fn with_intercept(mut self, with_intercept: bool) -> Self {
        self.0.with_intercept = with_intercept;
        self
    }

    /// Set the tolerance which is the minimum absolute change in any of the
    /// model coefficients needed for the parameter optimization to continue.
    ///
    /// Defaults to `1e-4` if not set
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Set the maximum number of iterations for the optimization routine.
    ///
    /// Defaults to `1000` if not set
    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.0.max_iterations = max_iterations;
        self
    }
}

impl ParamGuard for ElasticNetParams {
    type Checked = ElasticNetValidParams;
    type Error = ElasticNetError;

    /// Validate the hyperparameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.alpha < 0.0 {
            Err(ElasticNetError::InvalidAlpha(self.0.alpha))
        } else if !(0.0..=1.0).contains(&self.0.l1_ratio) {
            Err(ElasticNetError::InvalidL1Ratio(self.0.l1_ratio))
        } else if self.0.tolerance <= 0.0 {
            Err(ElasticNetError::InvalidTolerance(self.0.tolerance))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
