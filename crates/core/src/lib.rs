#![deny(unsafe_code)]
//! Core types for the lattice-walk simulation system.
//!
//! Provides the `Lcg` linear-congruential PRNG with its validated
//! `LcgParams`, the `Position` lattice point and Manhattan distance,
//! the `Dimensionality` move rules, and the shared `WalkError` type.

pub mod error;
pub mod lcg;
pub mod position;
pub mod rule;

pub use error::WalkError;
pub use lcg::{Lcg, LcgParams, REFERENCE_SEED, RESEED_INCREMENT};
pub use position::{manhattan_distance, Position};
pub use rule::{Dimensionality, UnitMove};
