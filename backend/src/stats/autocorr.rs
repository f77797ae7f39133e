//! Lag-1 autocorrelation
//!
//! Both sums run over indices `0..n-1` only. The denominator therefore
//! omits the last term of the full-sample variance; results must match
//! that truncated form, so do not widen it to all `n` terms.

use super::{ensure_finite, StatsError};

/// Minimum sequence length with at least one lagged pair
const MIN_SAMPLES: usize = 2;

/// Compute the lag-1 autocorrelation coefficient of `samples`
///
/// ```text
/// r = Σ_{i<n-1} (x_i - m)(x_{i+1} - m) / Σ_{i<n-1} (x_i - m)^2
/// ```
///
/// where `m` is the mean of all `n` samples. Not bounded to `[-1, 1]`.
///
/// # Errors
/// - `InsufficientSamples` if fewer than two samples are given
/// - `NonFinite` if any sample is NaN or infinite
/// - `ZeroVariance` if the denominator is zero (constant sequence)
/// - `Overflow` if an intermediate sum leaves the f32 range
///
/// # Example
/// ```
/// use lcg_validator_core::stats::autocorr_lag1;
///
/// let r = autocorr_lag1(&[0.0, 1.0, 0.0, 1.0]).unwrap();
/// assert_eq!(r, -1.0);
/// ```
pub fn autocorr_lag1(samples: &[f32]) -> Result<f32, StatsError> {
    if samples.len() < MIN_SAMPLES {
        return Err(StatsError::InsufficientSamples {
            required: MIN_SAMPLES,
            actual: samples.len(),
        });
    }
    ensure_finite(samples)?;

    // A constant sequence can leave rounding residue in the mean, so catch
    // it before the sums instead of relying on an exact zero below.
    if samples.iter().all(|&x| x == samples[0]) {
        return Err(StatsError::ZeroVariance);
    }

    let mean = samples.iter().sum::<f32>() / samples.len() as f32;
    if !mean.is_finite() {
        return Err(StatsError::Overflow { quantity: "mean" });
    }

    let (numerator, denominator) = samples
        .windows(2)
        .fold((0.0f32, 0.0f32), |(num, den), w| {
            let a = w[0] - mean;
            let b = w[1] - mean;
            (num + a * b, den + a * a)
        });

    if !numerator.is_finite() {
        return Err(StatsError::Overflow { quantity: "numerator" });
    }
    if !denominator.is_finite() {
        return Err(StatsError::Overflow { quantity: "denominator" });
    }
    if denominator == 0.0 {
        return Err(StatsError::ZeroVariance);
    }

    let r = numerator / denominator;
    if !r.is_finite() {
        return Err(StatsError::Overflow { quantity: "coefficient" });
    }

    Ok(r)
}
