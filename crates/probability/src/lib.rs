#![deny(unsafe_code)]
//! Exact reach probabilities for lattice walks.
//!
//! Arbitrary-precision rational arithmetic over `num-bigint`: an exact
//! binomial coefficient, the per-dimensionality reach probability, and an
//! exact decimal renderer for display.

pub mod binomial;
pub mod calculator;
pub mod decimal;

pub use binomial::binomial;
pub use calculator::probability;
pub use decimal::{decimal_string, expansion_terminates};
