//! Kolmogorov–Smirnov goodness-of-fit statistic
//!
//! The theoretical CDF of Uniform(0,1) is the identity, so after sorting
//! each sample is its own theoretical CDF value and a single pass over the
//! sorted sequence yields the maximum deviation.

use super::{ensure_finite, StatsError};

/// Compute the one-sample KS statistic `D` against Uniform(0,1)
///
/// Sorts `samples` ascending in place. For sorted index `i` the empirical
/// CDF is `(i + 1) / n` and the theoretical CDF is `samples[i]`; `D` is
/// the largest absolute difference.
///
/// # Errors
/// - `EmptySample` if `samples` is empty
/// - `NonFinite` if any sample is NaN or infinite (input left unsorted)
///
/// # Example
/// ```
/// use lcg_validator_core::stats::ks_statistic;
///
/// let mut samples = vec![0.9, 0.1, 0.5];
/// let d = ks_statistic(&mut samples).unwrap();
///
/// assert!((d - 0.2333).abs() < 1e-4);
/// assert_eq!(samples, vec![0.1, 0.5, 0.9]);
/// ```
pub fn ks_statistic(samples: &mut [f32]) -> Result<f32, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::EmptySample);
    }
    ensure_finite(samples)?;

    samples.sort_by(f32::total_cmp);

    let n = samples.len() as f32;
    let d = samples
        .iter()
        .enumerate()
        .map(|(i, &x)| ((i as f32 + 1.0) / n - x).abs())
        .fold(0.0f32, f32::max);

    Ok(d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        let mut samples: Vec<f32> = Vec::new();
        assert_eq!(ks_statistic(&mut samples), Err(StatsError::EmptySample));
    }

    #[test]
    fn test_single_sample() {
        // F_emp = 1.0, F_theor = 0.25
        let mut samples = vec![0.25];
        assert_eq!(ks_statistic(&mut samples).unwrap(), 0.75);
    }

    #[test]
    fn test_nan_rejected_without_sorting() {
        let mut samples = vec![0.7, f32::NAN, 0.2];
        assert_eq!(
            ks_statistic(&mut samples),
            Err(StatsError::NonFinite { index: 1 })
        );
        assert_eq!(samples[0], 0.7);
        assert_eq!(samples[2], 0.2);
    }
}
