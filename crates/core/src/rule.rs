//! Lattice dimensionality and the sample-to-move rules.
//!
//! Each dimensionality partitions the unit interval into `2d` equal-width
//! buckets, one per signed unit direction. The bucket boundaries replicate
//! the reference system exactly, including its asymmetric 1D comparison, so
//! a given sample sequence yields bit-identical paths.

use crate::error::WalkError;
use serde::{Deserialize, Serialize};

/// A single lattice move: one axis, displaced by `+1` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitMove {
    /// Axis index in `0..dimensionality`.
    pub axis: usize,
    /// Signed unit displacement along `axis`.
    pub delta: i64,
}

/// Lattice dimensionality: 1, 2, or 3 axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimensionality {
    One,
    Two,
    Three,
}

impl Dimensionality {
    /// Maps an axis count to a dimensionality.
    ///
    /// Returns `WalkError::InvalidDimensionality` for anything outside
    /// `{1, 2, 3}`.
    pub fn from_axes(axes: usize) -> Result<Self, WalkError> {
        match axes {
            1 => Ok(Dimensionality::One),
            2 => Ok(Dimensionality::Two),
            3 => Ok(Dimensionality::Three),
            other => Err(WalkError::InvalidDimensionality(other)),
        }
    }

    /// Number of axes.
    pub fn axes(self) -> usize {
        match self {
            Dimensionality::One => 1,
            Dimensionality::Two => 2,
            Dimensionality::Three => 3,
        }
    }

    /// Number of legal unit moves (`2 * axes`).
    pub fn directions(self) -> usize {
        2 * self.axes()
    }

    /// Selects the unit move for one PRNG sample.
    ///
    /// Buckets are upper-edge inclusive (`sample <= threshold` picks the
    /// lower bucket) in 2D and 3D; the 1D rule instead uses a strict
    /// `sample > 0.5` for the positive branch. Both conventions come from
    /// the reference system and must not be "fixed": samples landing
    /// exactly on a boundary would otherwise move the other way.
    pub fn select_move(self, sample: f64) -> UnitMove {
        match self {
            Dimensionality::One => {
                if sample > 0.5 {
                    UnitMove { axis: 0, delta: 1 }
                } else {
                    UnitMove { axis: 0, delta: -1 }
                }
            }
            Dimensionality::Two => {
                if sample <= 0.25 {
                    UnitMove { axis: 0, delta: 1 }
                } else if sample <= 0.5 {
                    UnitMove { axis: 0, delta: -1 }
                } else if sample <= 0.75 {
                    UnitMove { axis: 1, delta: 1 }
                } else {
                    UnitMove { axis: 1, delta: -1 }
                }
            }
            Dimensionality::Three => {
                if sample <= 1.0 / 6.0 {
                    UnitMove { axis: 0, delta: 1 }
                } else if sample <= 2.0 / 6.0 {
                    UnitMove { axis: 0, delta: -1 }
                } else if sample <= 3.0 / 6.0 {
                    UnitMove { axis: 1, delta: 1 }
                } else if sample <= 4.0 / 6.0 {
                    UnitMove { axis: 1, delta: -1 }
                } else if sample <= 5.0 / 6.0 {
                    UnitMove { axis: 2, delta: 1 }
                } else {
                    UnitMove { axis: 2, delta: -1 }
                }
            }
        }
    }
}
