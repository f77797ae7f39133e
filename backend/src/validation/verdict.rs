//! Threshold constants and per-test verdicts

use serde::{Deserialize, Serialize};

use crate::stats::{autocorr_lag1, ks_statistic, StatsError};

/// KS critical-value coefficient for significance level 0.05
pub const KS_COEFFICIENT_05: f32 = 1.36;

/// Bound on |r| below which a sequence shows no significant autocorrelation
pub const AUTOCORRELATION_THRESHOLD: f32 = 0.1;

/// KS critical value `1.36 / sqrt(n)` at significance level 0.05
///
/// # Example
/// ```
/// use lcg_validator_core::validation::ks_critical_value;
///
/// assert!((ks_critical_value(1000) - 0.04300).abs() < 1e-4);
/// ```
pub fn ks_critical_value(n: usize) -> f32 {
    KS_COEFFICIENT_05 / (n as f32).sqrt()
}

/// Outcome of the goodness-of-fit check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformityVerdict {
    pub sample_size: usize,
    /// KS statistic D
    pub statistic: f32,
    pub critical_value: f32,
    /// `statistic < critical_value`
    pub is_uniform: bool,
}

/// Outcome of the serial independence check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndependenceVerdict {
    pub sample_size: usize,
    /// Lag-1 autocorrelation coefficient r
    pub coefficient: f32,
    pub threshold: f32,
    /// `|coefficient| < threshold`
    pub is_independent: bool,
}

/// Run the KS test on `samples` and compare D to the critical value
///
/// Sorts `samples` in place.
pub fn check_uniformity(samples: &mut [f32]) -> Result<UniformityVerdict, StatsError> {
    let statistic = ks_statistic(samples)?;
    let critical_value = ks_critical_value(samples.len());

    Ok(UniformityVerdict {
        sample_size: samples.len(),
        statistic,
        critical_value,
        is_uniform: statistic < critical_value,
    })
}

/// Run the lag-1 autocorrelation test and compare |r| to the threshold
pub fn check_independence(samples: &[f32]) -> Result<IndependenceVerdict, StatsError> {
    let coefficient = autocorr_lag1(samples)?;

    Ok(IndependenceVerdict {
        sample_size: samples.len(),
        coefficient,
        threshold: AUTOCORRELATION_THRESHOLD,
        is_independent: coefficient.abs() < AUTOCORRELATION_THRESHOLD,
    })
}
