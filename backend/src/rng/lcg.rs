//! Multiplicative linear congruential generator
//!
//! # Algorithm
//!
//! ```text
//! state ← (state × 1220703125) mod 2^31
//! value  = state × 2^-31            (single precision)
//! ```
//!
//! There is no additive increment. The multiply is done in signed 64-bit
//! arithmetic with two's-complement wrapping, and a negative remainder is
//! lifted back into `[0, 2^31)` by adding the modulus.
//!
//! # Determinism
//!
//! Same seed → same sequence. The state is never reseeded after
//! construction, so consecutive batches continue one long sequence.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use super::UniformSource;

/// LCG multiplier (5^13)
pub const MULTIPLIER: i64 = 1_220_703_125;

/// LCG modulus (2^31)
pub const MODULUS: i64 = 2_147_483_648;

/// Scale from `[0, 2^31)` to `[0, 1)`; equal to 2^-31.
#[allow(clippy::excessive_precision)]
pub const NORMALIZER: f32 = 4.656_612_873_077_392_6e-10;

/// Largest f32 strictly below 1.0
const BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Deterministic uniform generator over `[0, 1)`
///
/// # Example
/// ```
/// use lcg_validator_core::LcgGenerator;
///
/// let mut rng = LcgGenerator::new(12345);
/// let values = rng.next_batch(10);
/// assert_eq!(values.len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LcgCheckpoint", into = "LcgCheckpoint")]
pub struct LcgGenerator {
    /// Internal register; in `[0, 2^31)` after the first draw
    state: i64,
}

/// Serialized form of an `LcgGenerator`
///
/// Restoring goes through `TryFrom` so a checkpoint cannot land on the
/// zero fixed point. Any other register value is one `new` would accept.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LcgCheckpoint {
    state: i64,
}

impl TryFrom<LcgCheckpoint> for LcgGenerator {
    type Error = String;

    fn try_from(checkpoint: LcgCheckpoint) -> Result<Self, Self::Error> {
        if checkpoint.state == 0 {
            return Err("LCG state 0 is a fixed point and cannot be restored".to_string());
        }
        Ok(Self {
            state: checkpoint.state,
        })
    }
}

impl From<LcgGenerator> for LcgCheckpoint {
    fn from(rng: LcgGenerator) -> Self {
        Self { state: rng.state }
    }
}

impl LcgGenerator {
    /// Create a generator with a fixed seed
    ///
    /// Zero is a fixed point of a multiplicative LCG and is replaced by 1.
    ///
    /// # Example
    /// ```
    /// use lcg_validator_core::LcgGenerator;
    ///
    /// let rng = LcgGenerator::new(12345);
    /// assert_eq!(rng.state(), 12345);
    /// ```
    pub fn new(seed: i64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create a generator seeded from wall-clock seconds since the Unix epoch
    pub fn from_time() -> Self {
        Self::new(clock_seed(SystemTime::now()))
    }

    /// Advance the register one step and return the new state
    ///
    /// The returned value is always in `[0, 2^31)`.
    pub fn next_state(&mut self) -> i64 {
        let mut x = self.state.wrapping_mul(MULTIPLIER) % MODULUS;
        if x < 0 {
            x += MODULUS;
        }
        self.state = x;
        x
    }

    /// Generate the next value in `[0.0, 1.0)`
    ///
    /// # Example
    /// ```
    /// use lcg_validator_core::LcgGenerator;
    ///
    /// let mut rng = LcgGenerator::new(12345);
    /// let value = rng.next_f32();
    /// assert!(value >= 0.0 && value < 1.0);
    /// ```
    pub fn next_f32(&mut self) -> f32 {
        let value = self.next_state() as f32 * NORMALIZER;
        // States within 64 of 2^31 round up to 2^31 when narrowed.
        if value >= 1.0 {
            BELOW_ONE
        } else {
            value
        }
    }

    /// Generate `count` values, continuing from the current state
    ///
    /// # Example
    /// ```
    /// use lcg_validator_core::LcgGenerator;
    ///
    /// let mut a = LcgGenerator::new(7);
    /// let mut b = LcgGenerator::new(7);
    ///
    /// let mut split = a.next_batch(5);
    /// split.extend(a.next_batch(5));
    /// assert_eq!(split, b.next_batch(10));
    /// ```
    pub fn next_batch(&mut self, count: usize) -> Vec<f32> {
        log::debug!("Drawing {} values from LCG", count);
        (0..count).map(|_| self.next_f32()).collect()
    }

    /// Get current register value (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use lcg_validator_core::LcgGenerator;
    ///
    /// let mut rng = LcgGenerator::new(12345);
    /// rng.next_batch(3);
    ///
    /// let mut resumed = LcgGenerator::new(rng.state());
    /// assert_eq!(rng.next_f32(), resumed.next_f32());
    /// ```
    pub fn state(&self) -> i64 {
        self.state
    }
}

/// Whole seconds since the Unix epoch, or 0 for a clock set before 1970
fn clock_seed(now: SystemTime) -> i64 {
    match now.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => {
            let secs = elapsed.as_secs() as i64;
            log::debug!("Seeding LCG from clock: {}", secs);
            secs
        }
        Err(err) => {
            log::warn!(
                "System clock is {:?} before the Unix epoch; seeding LCG with fallback seed",
                err.duration()
            );
            0
        }
    }
}

impl UniformSource for LcgGenerator {
    fn name(&self) -> &str {
        "lcg"
    }

    fn next_f32(&mut self) -> f32 {
        LcgGenerator::next_f32(self)
    }

    fn next_batch(&mut self, count: usize) -> Vec<f32> {
        LcgGenerator::next_batch(self, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_converted_to_nonzero() {
        let rng = LcgGenerator::new(0);
        assert_eq!(rng.state(), 1, "Zero seed should be converted to 1");
    }

    #[test]
    fn test_clock_before_epoch_falls_back_to_seed_one() {
        let before_epoch = UNIX_EPOCH - std::time::Duration::from_secs(60);
        assert_eq!(clock_seed(before_epoch), 0);
        assert_eq!(LcgGenerator::new(clock_seed(before_epoch)).state(), 1);
    }

    #[test]
    fn test_clock_seed_counts_seconds() {
        let later = UNIX_EPOCH + std::time::Duration::from_secs(1_700_000_000);
        assert_eq!(clock_seed(later), 1_700_000_000);
    }

    #[test]
    fn test_normalizer_is_two_to_minus_31() {
        assert_eq!(NORMALIZER, 1.0 / MODULUS as f32);
    }

    #[test]
    fn test_state_near_modulus_clamped_below_one() {
        // 1220703125 is odd, so its inverse mod 2^31 exists; pick the seed
        // whose successor is 2^31 - 1.
        let target = MODULUS - 1;
        let inverse = mod_inverse(MULTIPLIER, MODULUS);
        let seed = ((target as i128 * inverse as i128) % MODULUS as i128) as i64;

        let mut rng = LcgGenerator::new(seed);
        let value = rng.next_f32();

        assert_eq!(rng.state(), target);
        assert!(value < 1.0, "value {} must stay below 1.0", value);
    }

    #[test]
    fn test_negative_remainder_corrected() {
        let mut rng = LcgGenerator::new(-1);
        assert_eq!(rng.next_state(), 926_780_523);
    }

    #[test]
    fn test_wrapping_multiply_on_large_seed() {
        let mut rng = LcgGenerator::new(i64::MAX);
        let state = rng.next_state();
        let expected = i64::MAX.wrapping_mul(MULTIPLIER).rem_euclid(MODULUS);
        assert_eq!(state, expected);
    }

    fn mod_inverse(a: i64, m: i64) -> i64 {
        let (mut old_r, mut r) = (a as i128, m as i128);
        let (mut old_s, mut s) = (1i128, 0i128);
        while r != 0 {
            let q = old_r / r;
            (old_r, r) = (r, old_r - q * r);
            (old_s, s) = (s, old_s - q * s);
        }
        old_s.rem_euclid(m as i128) as i64
    }
}
