//! Exact binomial coefficients.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Computes `C(n, k)` exactly by iterative accumulation.
///
/// Multiplies by `n - i` and divides by `i + 1` one factor at a time; the
/// running product is a binomial coefficient after every iteration, so each
/// division is exact. No factorials are ever materialized.
pub fn binomial(n: u64, k: u64) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    // C(n, k) == C(n, n - k); take the shorter product.
    let k = k.min(n - k);
    let mut acc = BigUint::one();
    for i in 0..k {
        acc = acc * (n - i) / (i + 1);
    }
    acc
}
