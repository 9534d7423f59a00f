use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackingError>;

/// Errors surfaced by the tracking client and the demo pipeline
///
/// There is no retry or rollback layer behind these: every variant aborts
/// the surrounding pipeline through `?`.
#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("run {0} not found")]
    RunNotFound(String),
    #[error("dataset {0} not found")]
    DatasetNotFound(String),
    #[error("model {0} not found")]
    ModelNotFound(String),
    #[error("tracking server rejected the request with status {status}: {message}")]
    Server { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Estimator(#[from] fitlog_elasticnet::ElasticNetError),
}
