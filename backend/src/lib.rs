//! LCG Validator Core
//!
//! Multiplicative LCG over `[0, 1)` plus the statistical tests used to
//! validate it against a reference generator.
//!
//! # Architecture
//!
//! - **rng**: LCG under test, reference generator, `UniformSource` trait
//! - **stats**: Kolmogorov–Smirnov and lag-1 autocorrelation statistics
//! - **validation**: Thresholds, verdicts, and the comparison run
//!
//! # Critical Invariants
//!
//! 1. LCG state is in `[0, 2^31)` after every advance
//! 2. Generators are never reseeded between batches
//! 3. Statistics reject empty, short, or non-finite input with `StatsError`

// Module declarations
pub mod rng;
pub mod stats;
pub mod validation;

// Re-exports for convenience
pub use rng::{LcgGenerator, ReferenceGenerator, UniformSource};
pub use stats::{autocorr_lag1, ks_statistic, StatsError};
pub use validation::{
    check_independence, check_uniformity, ks_critical_value, run_validation, GeneratorReport,
    IndependenceVerdict, UniformityVerdict, ValidationConfig, ValidationError, ValidationReport,
};
