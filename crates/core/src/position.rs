//! Lattice positions and the Manhattan distance metric.

use crate::error::WalkError;
use crate::rule::{Dimensionality, UnitMove};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the integer lattice, one signed coordinate per axis.
///
/// The axis count is validated at construction (1 to 3), so a `Position`
/// always carries a well-formed [`Dimensionality`]; operations over pairs of
/// positions can only fail on a *mismatch* between the two.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct Position {
    coords: Vec<i64>,
}

impl Position {
    /// Creates a position from its coordinates.
    ///
    /// Returns `WalkError::InvalidDimensionality` unless there are 1, 2, or
    /// 3 of them.
    pub fn new(coords: Vec<i64>) -> Result<Self, WalkError> {
        Dimensionality::from_axes(coords.len())?;
        Ok(Self { coords })
    }

    /// The origin of the given dimensionality.
    pub fn origin(dimensionality: Dimensionality) -> Self {
        Self {
            coords: vec![0; dimensionality.axes()],
        }
    }

    /// The position's dimensionality.
    pub fn dimensionality(&self) -> Dimensionality {
        // Axis count was validated at construction.
        match self.coords.len() {
            1 => Dimensionality::One,
            2 => Dimensionality::Two,
            _ => Dimensionality::Three,
        }
    }

    /// Read-only view of the coordinates.
    pub fn coords(&self) -> &[i64] {
        &self.coords
    }

    /// Returns the position one unit move away.
    ///
    /// # Panics
    ///
    /// Panics if `mv.axis` is not an axis of this position. Moves produced
    /// by [`Dimensionality::select_move`] are always in range; the fields
    /// of [`UnitMove`] are public, so a hand-built move need not be.
    pub fn apply(&self, mv: UnitMove) -> Position {
        let mut coords = self.coords.clone();
        coords[mv.axis] += mv.delta;
        Position { coords }
    }
}

impl TryFrom<Vec<i64>> for Position {
    type Error = WalkError;

    fn try_from(coords: Vec<i64>) -> Result<Self, WalkError> {
        Position::new(coords)
    }
}

impl From<Position> for Vec<i64> {
    fn from(p: Position) -> Vec<i64> {
        p.coords
    }
}

impl From<[i64; 1]> for Position {
    fn from(coords: [i64; 1]) -> Self {
        Position {
            coords: coords.to_vec(),
        }
    }
}

impl From<[i64; 2]> for Position {
    fn from(coords: [i64; 2]) -> Self {
        Position {
            coords: coords.to_vec(),
        }
    }
}

impl From<[i64; 3]> for Position {
    fn from(coords: [i64; 3]) -> Self {
        Position {
            coords: coords.to_vec(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

/// Manhattan distance: sum of absolute coordinatewise differences.
///
/// Returns `WalkError::DimensionalityMismatch` if the two positions have
/// different axis counts.
pub fn manhattan_distance(p: &Position, q: &Position) -> Result<u64, WalkError> {
    if p.coords.len() != q.coords.len() {
        return Err(WalkError::DimensionalityMismatch {
            lhs: p.coords.len(),
            rhs: q.coords.len(),
        });
    }
    Ok(p.coords
        .iter()
        .zip(&q.coords)
        .map(|(a, b)| a.abs_diff(*b))
        .sum())
}
