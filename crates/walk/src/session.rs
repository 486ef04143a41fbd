//! Serializable record of a completed walk request.

use crate::target::CancelToken;
use crate::walker::Walker;
use lattice_walk_core::{Dimensionality, Position, WalkError};
use serde::{Deserialize, Serialize};

/// One walk request and the path it produced, in a form a front end (or a
/// test harness) can serialize and render.
///
/// `steps` is the number of moves actually taken: the requested count for a
/// fixed-length walk, the first-passage count for a target-seeking one.
/// `reached` is only `false` for a cancelled target-seeking walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkSession {
    pub dimensionality: Dimensionality,
    pub source: Position,
    pub target: Option<Position>,
    pub steps: usize,
    pub reached: bool,
    pub path: Vec<Position>,
}

impl WalkSession {
    /// Runs a fixed-length walk on `walker` and records it.
    pub fn fixed(walker: &mut Walker, steps: usize, source: Position) -> Self {
        let path = walker.fixed_walk(steps, source.clone());
        Self {
            dimensionality: source.dimensionality(),
            source,
            target: None,
            steps,
            reached: true,
            path,
        }
    }

    /// Runs a target-seeking walk on `walker` and records it, partial path
    /// included if `cancel` fired.
    pub fn seek(
        walker: &mut Walker,
        source: Position,
        target: Position,
        cancel: &CancelToken,
    ) -> Result<Self, WalkError> {
        let outcome = walker.target_walk(source.clone(), target.clone(), cancel)?;
        let reached = outcome.reached();
        let path = outcome.into_path();
        Ok(Self {
            dimensionality: source.dimensionality(),
            source,
            target: Some(target),
            steps: path.len() - 1,
            reached,
            path,
        })
    }
}
