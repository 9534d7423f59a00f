use thiserror::Error;

pub type Result<T> = std::result::Result<T, ElasticNetError>;

/// Errors arising from hyperparameter validation or model estimation
#[derive(Error, Debug, Clone)]
pub enum ElasticNetError {
    /// The penalty weight is negative
    #[error("invalid alpha {0}, must be non-negative")]
    InvalidAlpha(f64),
    /// The L1 ratio lies outside the unit range
    #[error("invalid l1 ratio {0}, must lie in [0, 1]")]
    InvalidL1Ratio(f64),
    /// The tolerance is not positive
    #[error("invalid tolerance {0}, must be positive")]
    InvalidTolerance(f64),
    #[error(transparent)]
    BaseCrate(#[from] fitlog::Error),
}
