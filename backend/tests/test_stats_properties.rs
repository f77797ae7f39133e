//! Property tests for the generator and the statistics

use lcg_validator_core::rng::MODULUS;
use lcg_validator_core::{autocorr_lag1, ks_statistic, LcgGenerator};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_lcg_values_in_unit_interval(seed in any::<i64>(), count in 0usize..2000) {
        let mut rng = LcgGenerator::new(seed);
        for val in rng.next_batch(count) {
            prop_assert!((0.0..1.0).contains(&val), "{} outside [0, 1)", val);
        }
    }

    #[test]
    fn prop_lcg_state_in_range(seed in any::<i64>()) {
        let mut rng = LcgGenerator::new(seed);
        for _ in 0..64 {
            let state = rng.next_state();
            prop_assert!((0..MODULUS).contains(&state));
        }
    }

    #[test]
    fn prop_lcg_batches_concatenate(seed in any::<i64>(), a in 0usize..200, b in 0usize..200) {
        let mut split = LcgGenerator::new(seed);
        let mut whole = LcgGenerator::new(seed);

        let mut values = split.next_batch(a);
        values.extend(split.next_batch(b));

        prop_assert_eq!(values, whole.next_batch(a + b));
    }

    #[test]
    fn prop_ks_bounded_and_sorts(mut samples in prop::collection::vec(0.0f32..1.0, 1..500)) {
        let d = ks_statistic(&mut samples).unwrap();

        prop_assert!((0.0..=1.0).contains(&d), "D = {}", d);
        prop_assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_ks_positive_for_unit_samples(mut samples in prop::collection::vec(0.0f32..1.0, 1..500)) {
        // The last sorted point has F_emp = 1 and x < 1, so D > 0
        let d = ks_statistic(&mut samples).unwrap();
        prop_assert!(d > 0.0);
    }

    #[test]
    fn prop_autocorr_leaves_input_untouched(samples in prop::collection::vec(0.0f32..1.0, 2..500)) {
        let copy = samples.clone();
        let _ = autocorr_lag1(&samples);
        prop_assert_eq!(samples, copy);
    }
}
