//! Statistical tests over sample sequences
//!
//! - **ks**: one-sample Kolmogorov–Smirnov statistic against Uniform(0,1)
//! - **autocorr**: lag-1 serial autocorrelation
//!
//! Both accept any finite `f32` sequence; they make no assumption about
//! where the samples came from.

mod autocorr;
mod ks;

pub use autocorr::autocorr_lag1;
pub use ks::ks_statistic;

use thiserror::Error;

/// Errors from statistical test input validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StatsError {
    #[error("Sample sequence is empty")]
    EmptySample,

    #[error("Insufficient samples: required {required}, got {actual}")]
    InsufficientSamples { required: usize, actual: usize },

    #[error("Sample at index {index} is not finite")]
    NonFinite { index: usize },

    #[error("Sequence has zero variance; autocorrelation is undefined")]
    ZeroVariance,

    #[error("Intermediate {quantity} overflowed the f32 range")]
    Overflow { quantity: &'static str },
}

/// Reject the first NaN or infinite sample
fn ensure_finite(samples: &[f32]) -> Result<(), StatsError> {
    match samples.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(StatsError::NonFinite { index }),
        None => Ok(()),
    }
}
