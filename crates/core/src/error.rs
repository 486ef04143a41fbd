//! Error types for the lattice-walk core.

use thiserror::Error;

/// Errors produced by core operations.
///
/// Every variant is rejected synchronously, before any generator state is
/// mutated. Cooperative cancellation of a target-seeking walk is not an
/// error and is reported through the walk's outcome instead.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The LCG modulus was 0 or 1; the unit projection divides by
    /// `modulus - 1`.
    #[error("invalid modulus {0}: must be greater than 1")]
    InvalidModulus(u64),

    /// An axis count outside {1, 2, 3} was requested.
    #[error("invalid dimensionality {0}: must be 1, 2, or 3")]
    InvalidDimensionality(usize),

    /// Two positions in the same operation had different axis counts.
    #[error("dimensionality mismatch: {lhs} vs {rhs} axes")]
    DimensionalityMismatch { lhs: usize, rhs: usize },
}
