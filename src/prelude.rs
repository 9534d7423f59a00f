//! Fitlog prelude.
//!
//! This module contains the most used types, traits and functions that you
//! can import easily as a group.
//!

#[doc(no_inline)]
pub use crate::dataset::Dataset;

#[doc(no_inline)]
pub use crate::error::{Error, Result};

#[doc(no_inline)]
pub use crate::metrics_regression::{Regression, RegressionReport};

#[doc(no_inline)]
pub use crate::param_guard::ParamGuard;

#[doc(no_inline)]
pub use crate::traits::*;
