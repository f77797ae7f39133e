//! Uniform random number generation
//!
//! Provides the multiplicative LCG under test and the reference generator
//! it is validated against. Both produce `f32` values in `[0, 1)`.

mod lcg;
mod reference;

pub use lcg::{LcgGenerator, MODULUS, MULTIPLIER, NORMALIZER};
pub use reference::ReferenceGenerator;

/// A source of uniform `f32` samples in `[0, 1)`
///
/// Implementors advance persistent internal state on every draw; a
/// source is never reseeded between batches.
pub trait UniformSource {
    /// Short label used in reports
    fn name(&self) -> &str;

    /// Draw one value
    fn next_f32(&mut self) -> f32;

    /// Draw `count` values in order
    fn next_batch(&mut self, count: usize) -> Vec<f32> {
        (0..count).map(|_| self.next_f32()).collect()
    }
}
