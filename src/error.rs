//! Error types in fitlog
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("records and targets disagree on the number of samples: {records} vs {targets}")]
    MismatchedSamples { records: usize, targets: usize },
    #[error("not enough samples to fit a model")]
    NotEnoughSamples,
}
