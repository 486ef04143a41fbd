//! Exact decimal rendering of rational probabilities.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

/// Renders a non-negative rational as a truncated decimal string with
/// exactly `digits` fractional digits.
///
/// Long division on the exact numerator and denominator; nothing is rounded
/// into floating point, the expansion is simply cut off. `digits == 0`
/// yields just the integer part.
pub fn decimal_string(value: &BigRational, digits: usize) -> String {
    let numerator = value.numer().abs();
    let denominator = value.denom().abs();
    let sign = if value.is_negative() { "-" } else { "" };

    let integer = &numerator / &denominator;
    if digits == 0 {
        return format!("{sign}{integer}");
    }

    let mut remainder = &numerator % &denominator;
    let mut fraction = String::with_capacity(digits);
    for _ in 0..digits {
        remainder *= BigInt::from(10);
        let digit = &remainder / &denominator;
        fraction.push(
            char::from_digit(digit.to_u32().unwrap_or(0), 10).unwrap_or('0'),
        );
        remainder %= &denominator;
    }
    format!("{sign}{integer}.{fraction}")
}

/// Whether the decimal expansion of `value` terminates within `digits`
/// fractional digits (i.e. the rendering above is exact, not truncated).
pub fn expansion_terminates(value: &BigRational, digits: usize) -> bool {
    let mut remainder = value.numer().abs() % value.denom().abs();
    let denominator = value.denom().abs();
    for _ in 0..digits {
        if remainder.is_zero() {
            return true;
        }
        remainder = remainder * BigInt::from(10) % &denominator;
    }
    remainder.is_zero()
}
