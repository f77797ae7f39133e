//! Reference uniform generator
//!
//! Baseline the LCG is compared against: `rand`'s standard RNG sampled
//! through a `Uniform<f32>` over `[0, 1)`.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::UniformSource;

/// Uniform `[0, 1)` source backed by `rand::rngs::StdRng`
#[derive(Debug, Clone)]
pub struct ReferenceGenerator {
    rng: StdRng,
    dist: Uniform<f32>,
}

impl ReferenceGenerator {
    /// Create a reproducible reference generator
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            dist: Uniform::new(0.0, 1.0),
        }
    }

    /// Create a reference generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        log::debug!("Seeding reference generator from OS entropy");
        Self {
            rng: StdRng::from_entropy(),
            dist: Uniform::new(0.0, 1.0),
        }
    }
}

impl UniformSource for ReferenceGenerator {
    fn name(&self) -> &str {
        "reference"
    }

    fn next_f32(&mut self) -> f32 {
        self.dist.sample(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = ReferenceGenerator::new(42);
        let mut b = ReferenceGenerator::new(42);
        assert_eq!(a.next_batch(50), b.next_batch(50));
    }

    #[test]
    fn test_values_in_unit_interval() {
        let mut rng = ReferenceGenerator::new(7);
        for val in rng.next_batch(1000) {
            assert!((0.0..1.0).contains(&val), "{} outside [0.0, 1.0)", val);
        }
    }
}
