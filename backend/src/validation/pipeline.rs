//! Full validation run: LCG versus reference generator
//!
//! Draw order per run (neither generator is reset in between):
//!
//! 1. `preview_count` values from the LCG, then from the reference
//! 2. `sample_count` values from the LCG for KS, then from the reference
//! 3. a fresh `sample_count` batch from the LCG for autocorrelation, then
//!    from the reference

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::verdict::{check_independence, check_uniformity, IndependenceVerdict, UniformityVerdict};
use crate::rng::UniformSource;
use crate::stats::StatsError;

/// Errors that abort a validation run
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),
}

/// Sample counts for a validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Values printed from each generator before testing
    pub preview_count: usize,

    /// Batch size for each statistical test
    pub sample_count: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            preview_count: 10,
            sample_count: 1000,
        }
    }
}

impl ValidationConfig {
    /// Check that both tests can run on `sample_count` values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sample_count < 2 {
            return Err(ValidationError::InvalidConfig(format!(
                "sample_count must be at least 2, got {}",
                self.sample_count
            )));
        }
        Ok(())
    }
}

/// Results for one generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorReport {
    pub name: String,
    pub preview: Vec<f32>,
    pub uniformity: UniformityVerdict,
    pub independence: IndependenceVerdict,
}

/// Results for the generator under test and the reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub config: ValidationConfig,
    pub candidate: GeneratorReport,
    pub reference: GeneratorReport,
}

/// Run both tests on `candidate` and `reference`
///
/// # Errors
/// Returns `InvalidConfig` before drawing anything if the config is
/// rejected; statistics errors are propagated as `Stats`.
pub fn run_validation<C, R>(
    config: &ValidationConfig,
    candidate: &mut C,
    reference: &mut R,
) -> Result<ValidationReport, ValidationError>
where
    C: UniformSource + ?Sized,
    R: UniformSource + ?Sized,
{
    config.validate()?;

    let candidate_preview = candidate.next_batch(config.preview_count);
    let reference_preview = reference.next_batch(config.preview_count);

    let mut batch = candidate.next_batch(config.sample_count);
    let candidate_uniformity = check_uniformity(&mut batch)?;
    let mut batch = reference.next_batch(config.sample_count);
    let reference_uniformity = check_uniformity(&mut batch)?;

    let batch = candidate.next_batch(config.sample_count);
    let candidate_independence = check_independence(&batch)?;
    let batch = reference.next_batch(config.sample_count);
    let reference_independence = check_independence(&batch)?;

    let candidate = GeneratorReport {
        name: candidate.name().to_string(),
        preview: candidate_preview,
        uniformity: candidate_uniformity,
        independence: candidate_independence,
    };
    let reference = GeneratorReport {
        name: reference.name().to_string(),
        preview: reference_preview,
        uniformity: reference_uniformity,
        independence: reference_independence,
    };

    for report in [&candidate, &reference] {
        log::info!(
            "{}: D={:.5} (critical {:.5}, uniform={}), r={:.5} (independent={})",
            report.name,
            report.uniformity.statistic,
            report.uniformity.critical_value,
            report.uniformity.is_uniform,
            report.independence.coefficient,
            report.independence.is_independent
        );
    }

    Ok(ValidationReport {
        config: config.clone(),
        candidate,
        reference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert_eq!(config.preview_count, 10);
        assert_eq!(config.sample_count, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sample_count_below_two_rejected() {
        let config = ValidationConfig {
            preview_count: 10,
            sample_count: 1,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidConfig(_))
        ));
    }
}
