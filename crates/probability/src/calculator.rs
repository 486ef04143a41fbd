//! Exact reach probabilities for lattice walks.
//!
//! All arithmetic is exact: `BigUint` powers, exact binomial coefficients,
//! and reduced `BigRational` results. Floating point drifts from the true
//! values within a few hundred steps, so it never appears here.

use crate::binomial::binomial;
use lattice_walk_core::{manhattan_distance, Dimensionality, Position, WalkError};
use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{Pow, Zero};

/// Probability that a walk from `source` stands on `destination` after
/// exactly `steps` moves.
///
/// Distance is the absolute displacement in 1D and the Manhattan distance in
/// 2D and 3D. Since every move changes the Manhattan distance to the
/// destination by one, a destination is unreachable (probability exactly
/// zero) when `steps` and the distance differ in parity, or when the
/// distance exceeds `steps`.
///
/// - 1D: `C(steps, (steps + distance) / 2) / 2^steps` - reaching a
///   displacement of `distance` takes exactly `(steps + distance) / 2`
///   positive moves.
/// - 2D: `C(steps, distance) * 3^(steps - distance) / 4^steps`.
/// - 3D: `C(steps, distance) * 5^(steps - distance) / 6^steps`.
///
/// The 2D/3D form treats the walk as a binomial process over the aggregate
/// Manhattan distance with per-step success probability `1/4` resp. `1/6`.
/// That matches the reference system it reproduces, not the true multinomial
/// distribution of the simulated move rule; see DESIGN.md.
///
/// Returns `WalkError::DimensionalityMismatch` when the positions disagree
/// on axis count.
pub fn probability(
    steps: u64,
    source: &Position,
    destination: &Position,
) -> Result<BigRational, WalkError> {
    let distance = manhattan_distance(source, destination)?;
    // `steps - distance` cannot underflow past the guard, and unlike
    // `steps + distance` it cannot overflow either.
    if distance > steps || (steps - distance) % 2 != 0 {
        return Ok(BigRational::zero());
    }

    let (numerator, base) = match source.dimensionality() {
        Dimensionality::One => {
            let positive_moves = distance + (steps - distance) / 2;
            (binomial(steps, positive_moves), 2u32)
        }
        Dimensionality::Two => (
            binomial(steps, distance) * BigUint::from(3u32).pow(steps - distance),
            4u32,
        ),
        Dimensionality::Three => (
            binomial(steps, distance) * BigUint::from(5u32).pow(steps - distance),
            6u32,
        ),
    };
    let denominator = BigUint::from(base).pow(steps);
    Ok(BigRational::new(
        BigInt::from(numerator),
        BigInt::from(denominator),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    // -- 1D --

    #[test]
    fn one_step_to_adjacent_site_is_one_half() {
        let p = probability(1, &Position::from([0]), &Position::from([1])).unwrap();
        assert_eq!(p, ratio(1, 2));
    }

    #[test]
    fn two_steps_back_to_the_source_is_one_half() {
        let p = probability(2, &Position::from([0]), &Position::from([0])).unwrap();
        assert_eq!(p, ratio(1, 2));
    }

    #[test]
    fn two_steps_to_distance_two_is_one_quarter() {
        let p = probability(2, &Position::from([0]), &Position::from([2])).unwrap();
        assert_eq!(p, ratio(1, 4));
    }

    #[test]
    fn four_steps_back_to_the_source_is_three_eighths() {
        let p = probability(4, &Position::from([0]), &Position::from([0])).unwrap();
        assert_eq!(p, ratio(3, 8));
    }

    #[test]
    fn displacement_is_translation_invariant() {
        let a = probability(9, &Position::from([0]), &Position::from([3])).unwrap();
        let b = probability(9, &Position::from([-40]), &Position::from([-37])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn one_d_distribution_sums_to_exactly_one() {
        for steps in [1u64, 2, 3, 7, 8, 25] {
            let mut total = BigRational::zero();
            let n = steps as i64;
            for d in -n..=n {
                if (n - d).rem_euclid(2) == 0 {
                    total += probability(steps, &Position::from([0]), &Position::from([d]))
                        .unwrap();
                }
            }
            assert!(total.is_one(), "normalization failed for {steps} steps");
        }
    }

    // -- 2D --

    #[test]
    fn two_d_reference_values() {
        let origin = Position::from([0, 0]);
        assert_eq!(
            probability(2, &origin, &Position::from([1, 1])).unwrap(),
            ratio(1, 16)
        );
        assert_eq!(
            probability(4, &origin, &Position::from([2, 0])).unwrap(),
            ratio(27, 128)
        );
        assert_eq!(
            probability(2, &origin, &origin).unwrap(),
            ratio(9, 16)
        );
    }

    // -- 3D --

    #[test]
    fn three_d_reference_values() {
        let origin = Position::from([0, 0, 0]);
        assert_eq!(
            probability(1, &origin, &Position::from([0, 0, 1])).unwrap(),
            ratio(1, 6)
        );
        assert_eq!(
            probability(3, &origin, &Position::from([1, 1, 1])).unwrap(),
            ratio(1, 216)
        );
        assert_eq!(
            probability(4, &origin, &origin).unwrap(),
            ratio(625, 1296)
        );
    }

    // -- Parity and reachability gates --

    #[test]
    fn odd_parity_gap_gives_exactly_zero_in_every_dimensionality() {
        assert!(probability(2, &Position::from([0]), &Position::from([1]))
            .unwrap()
            .is_zero());
        assert!(
            probability(3, &Position::from([0, 0]), &Position::from([1, 1]))
                .unwrap()
                .is_zero()
        );
        assert!(probability(
            4,
            &Position::from([0, 0, 0]),
            &Position::from([1, 1, 1])
        )
        .unwrap()
        .is_zero());
    }

    #[test]
    fn extreme_step_and_distance_values_pass_the_parity_gate_without_overflow() {
        // Distance u64::MAX - 1 against u64::MAX steps leaves an odd gap,
        // so the answer is exactly zero and has to come out of the gate
        // rather than a panic on `steps + distance`.
        let p = probability(
            u64::MAX,
            &Position::from([i64::MIN]),
            &Position::from([i64::MAX - 1]),
        )
        .unwrap();
        assert!(p.is_zero());
    }

    #[test]
    fn destination_beyond_step_budget_gives_exactly_zero() {
        assert!(probability(3, &Position::from([0]), &Position::from([5]))
            .unwrap()
            .is_zero());
    }

    #[test]
    fn zero_steps_to_the_source_is_certain() {
        let p = probability(0, &Position::from([7, -2]), &Position::from([7, -2])).unwrap();
        assert!(p.is_one());
    }

    #[test]
    fn mismatched_positions_are_rejected() {
        let result = probability(4, &Position::from([0]), &Position::from([0, 0]));
        assert!(matches!(
            result,
            Err(WalkError::DimensionalityMismatch { lhs: 1, rhs: 2 })
        ));
    }

    // -- Large step counts stay exact --

    #[test]
    fn large_walk_probability_is_exact() {
        // 550 steps to a Manhattan distance of 550: every step must be one
        // of the 550 "toward" moves, so the probability is exactly 4^-550.
        let p = probability(550, &Position::from([0, 0]), &Position::from([250, 300])).unwrap();
        let expected = BigRational::new(
            BigInt::from(1u32),
            BigInt::from(BigUint::from(4u32).pow(550u64)),
        );
        assert_eq!(p, expected);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn probabilities_always_lie_in_the_closed_unit_interval(
                steps in 0u64..120,
                dx in -60i64..60,
                dy in -60i64..60,
            ) {
                let p = probability(
                    steps,
                    &Position::from([0, 0]),
                    &Position::from([dx, dy]),
                )
                .unwrap();
                prop_assert!(p >= BigRational::zero());
                prop_assert!(p <= BigRational::new(BigInt::from(1), BigInt::from(1)));
            }

            #[test]
            fn parity_law_for_any_1d_displacement(
                steps in 0u64..200,
                d in -200i64..200,
            ) {
                let p = probability(
                    steps,
                    &Position::from([0]),
                    &Position::from([d]),
                )
                .unwrap();
                if (steps as i64 - d.abs()).rem_euclid(2) == 1 {
                    prop_assert!(p.is_zero());
                }
            }
        }
    }
}
