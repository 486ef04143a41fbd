//! Deterministic linear-congruential PRNG.
//!
//! Implements the classic mixed LCG recurrence `x_{n+1} = (a*x_n + c) mod m`
//! with an evolving integer state and a unit-interval projection. Same
//! parameters and seed always produce the same sequence of values across all
//! platforms (pure integer arithmetic in the core recurrence).

use crate::error::WalkError;
use serde::{Deserialize, Serialize};

/// Constant `k` from which the reference multiplier is derived.
pub const REFERENCE_K: u64 = 15_686_546_789;

/// Reference multiplier `a = 1 + 2k`.
pub const REFERENCE_MULTIPLIER: u64 = 1 + 2 * REFERENCE_K;

/// Reference additive increment `c`.
pub const REFERENCE_INCREMENT: u64 = 11;

/// Reference modulus `m = 2^30`.
pub const REFERENCE_MODULUS: u64 = 1 << 30;

/// Initial seed used by the reference system at process start.
pub const REFERENCE_SEED: u64 = 42;

/// Amount the batch seed counter advances per walk request.
pub const RESEED_INCREMENT: u64 = 10;

/// Validated `(multiplier, increment, modulus)` parameter set.
///
/// Constructing an `LcgParams` performs the `modulus > 1` check once, so
/// [`LcgParams::generator`] can hand out generators infallibly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcgParams {
    multiplier: u64,
    increment: u64,
    modulus: u64,
}

impl LcgParams {
    /// Parameters of the reference generator: `a = 1 + 2k` with
    /// `k = 15686546789`, `c = 11`, `m = 2^30`.
    pub const REFERENCE: LcgParams = LcgParams {
        multiplier: REFERENCE_MULTIPLIER,
        increment: REFERENCE_INCREMENT,
        modulus: REFERENCE_MODULUS,
    };

    /// Creates a validated parameter set.
    ///
    /// Returns `WalkError::InvalidModulus` if `modulus <= 1`: the unit
    /// projection divides by `modulus - 1`, so a degenerate modulus would
    /// divide by zero.
    pub fn new(multiplier: u64, increment: u64, modulus: u64) -> Result<Self, WalkError> {
        if modulus <= 1 {
            return Err(WalkError::InvalidModulus(modulus));
        }
        Ok(Self {
            multiplier,
            increment,
            modulus,
        })
    }

    /// Builds a generator seeded with `seed` (reduced into `[0, modulus)`).
    pub fn generator(&self, seed: u64) -> Lcg {
        Lcg {
            params: *self,
            state: seed % self.modulus,
        }
    }

    /// The multiplicative factor `a`.
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// The additive increment `c`.
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// The modulus `m`.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

/// Linear-congruential generator. Same parameters and seed always produce
/// the same sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    params: LcgParams,
    state: u64,
}

impl Lcg {
    /// Creates a generator from raw parameters.
    ///
    /// Returns `WalkError::InvalidModulus` if `modulus <= 1`. The seed is
    /// reduced modulo `modulus` to establish the state invariant.
    pub fn new(multiplier: u64, increment: u64, modulus: u64, seed: u64) -> Result<Self, WalkError> {
        Ok(LcgParams::new(multiplier, increment, modulus)?.generator(seed))
    }

    /// Creates a generator with the reference parameters.
    pub fn reference(seed: u64) -> Self {
        LcgParams::REFERENCE.generator(seed)
    }

    /// Advances the state and returns the new raw value.
    ///
    /// The product `a * state` can exceed 64 bits for the reference
    /// parameters, so the recurrence runs in 128-bit intermediates.
    pub fn next_raw(&mut self) -> u64 {
        let a = self.params.multiplier as u128;
        let c = self.params.increment as u128;
        let m = self.params.modulus as u128;
        self.state = ((a * self.state as u128 + c) % m) as u64;
        self.state
    }

    /// Advances the state and projects it to the unit interval as
    /// `next_raw() / (modulus - 1)`.
    ///
    /// The reference system divides by `modulus - 1` rather than `modulus`,
    /// so the value `1.0` itself is reachable (when the state lands on
    /// `modulus - 1`). That off-by-one is preserved for sequence-level
    /// compatibility; move rules account for it.
    pub fn next_unit(&mut self) -> f64 {
        self.next_raw() as f64 / (self.params.modulus - 1) as f64
    }

    /// Current internal state, always in `[0, modulus)`.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// The generator's parameter set.
    pub fn params(&self) -> LcgParams {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Golden values --

    #[test]
    fn next_raw_produces_known_golden_values_for_seed_42() {
        // First raw states of the reference sequence from seed 42. If this
        // test breaks, the recurrence changed and every recorded path
        // produced with the reference parameters is invalidated.
        let mut g = Lcg::reference(42);
        assert_eq!(g.next_raw(), 188_712_281);
        assert_eq!(g.next_raw(), 1_004_050_334);
        assert_eq!(g.next_raw(), 292_660_821);
        assert_eq!(g.next_raw(), 173_348_722);
    }

    #[test]
    fn next_unit_matches_reference_projection() {
        let mut g = Lcg::reference(42);
        let v = g.next_unit();
        let expected = 188_712_281.0 / ((1u64 << 30) - 1) as f64;
        assert_eq!(v, expected, "unit projection diverged: {v} vs {expected}");
    }

    // -- Construction --

    #[test]
    fn new_rejects_degenerate_modulus() {
        assert!(matches!(
            Lcg::new(5, 3, 0, 1),
            Err(WalkError::InvalidModulus(0))
        ));
        assert!(matches!(
            Lcg::new(5, 3, 1, 1),
            Err(WalkError::InvalidModulus(1))
        ));
    }

    #[test]
    fn seed_is_reduced_into_state_range() {
        let g = Lcg::new(7, 3, 10, 25).unwrap();
        assert_eq!(g.state(), 5);
    }

    // -- Determinism --

    #[test]
    fn two_generators_with_same_seed_produce_identical_sequences() {
        let mut a = Lcg::reference(42);
        let mut b = Lcg::reference(42);
        for i in 0..1000 {
            assert_eq!(
                a.next_unit(),
                b.next_unit(),
                "sequences diverged at index {i}"
            );
        }
    }

    #[test]
    fn state_invariant_holds_across_advances() {
        let mut g = Lcg::reference(42);
        for _ in 0..10_000 {
            let raw = g.next_raw();
            assert!(raw < REFERENCE_MODULUS);
        }
    }

    // -- Unit projection --

    #[test]
    fn next_unit_can_reach_exactly_one() {
        // Dividing by modulus - 1 means the top state maps to exactly 1.0.
        // Small generator where state m - 1 is reachable: x -> (x + 1) mod 4.
        let mut g = Lcg::new(1, 1, 4, 2).unwrap();
        assert_eq!(g.next_unit(), 1.0);
    }

    #[test]
    fn next_unit_stays_in_closed_unit_interval() {
        let mut g = Lcg::reference(42);
        for i in 0..10_000 {
            let v = g.next_unit();
            assert!(
                (0.0..=1.0).contains(&v),
                "next_unit() = {v} out of [0, 1] at iteration {i}"
            );
        }
    }

    // -- Period --

    #[test]
    fn no_state_repeat_within_2_pow_28_advances() {
        // The reference multiplier is 3 mod 4, so the generator does not
        // reach the full period m; the cycle through seed 42 is still at
        // least 2^28 long, which this verifies as a lower bound.
        let mut g = Lcg::reference(REFERENCE_SEED);
        for i in 0..(1u64 << 28) {
            assert_ne!(
                g.next_raw(),
                REFERENCE_SEED,
                "state returned to the seed after {} advances",
                i + 1
            );
        }
    }

    // -- Serialization --

    #[test]
    fn serialization_roundtrip_preserves_state() {
        let mut g = Lcg::reference(42);
        for _ in 0..50 {
            g.next_raw();
        }
        let json = serde_json::to_string(&g).unwrap();
        let mut restored: Lcg = serde_json::from_str(&json).unwrap();
        for i in 0..100 {
            assert_eq!(
                g.next_raw(),
                restored.next_raw(),
                "sequences diverged after deserialization at index {i}"
            );
        }
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn determinism_for_any_seed(seed: u64) {
                let mut a = Lcg::reference(seed);
                let mut b = Lcg::reference(seed);
                for _ in 0..100 {
                    prop_assert_eq!(a.next_raw(), b.next_raw());
                }
            }

            #[test]
            fn state_stays_below_modulus_for_any_parameters(
                multiplier: u64,
                increment: u64,
                modulus in 2u64..=u64::MAX,
                seed: u64,
            ) {
                let mut g = Lcg::new(multiplier, increment, modulus, seed).unwrap();
                for _ in 0..100 {
                    prop_assert!(g.next_raw() < modulus);
                }
            }

            #[test]
            fn unit_values_bounded_for_any_seed(seed: u64) {
                let mut g = Lcg::reference(seed);
                for _ in 0..100 {
                    let v = g.next_unit();
                    prop_assert!((0.0..=1.0).contains(&v));
                }
            }
        }
    }
}
