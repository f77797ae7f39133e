//! Validation - classify generator output against fixed thresholds
//!
//! Turns raw statistics into uniform/independent verdicts and runs the
//! full comparison of the LCG against the reference generator.
//!
//! See `pipeline.rs` for the draw sequence.

pub mod pipeline;
pub mod verdict;

// Re-export main types for convenience
pub use pipeline::{run_validation, GeneratorReport, ValidationConfig, ValidationError, ValidationReport};
pub use verdict::{
    check_independence, check_uniformity, ks_critical_value, IndependenceVerdict, UniformityVerdict,
    AUTOCORRELATION_THRESHOLD, KS_COEFFICIENT_05,
};
