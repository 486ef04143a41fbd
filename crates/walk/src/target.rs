//! Lazy target-seeking walk stream and cooperative cancellation.

use lattice_walk_core::{Dimensionality, Lcg, Position};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag for an unbounded target-seeking walk.
///
/// Clones share the flag, so one can be handed to another thread (a UI or
/// watchdog) while the walk holds the other. The walk checks the flag once
/// per produced position; cancellation is not an error and the partial path
/// survives it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Outcome of a target-seeking walk.
///
/// Both variants carry the path produced so far: complete (ending at the
/// target) when reached, partial when cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOutcome {
    /// The walk arrived; the final position equals the target.
    Reached(Vec<Position>),
    /// Cancellation fired first; the path holds every position produced
    /// before the walk stopped.
    Cancelled(Vec<Position>),
}

impl TargetOutcome {
    /// The produced path, complete or partial.
    pub fn path(&self) -> &[Position] {
        match self {
            TargetOutcome::Reached(path) | TargetOutcome::Cancelled(path) => path,
        }
    }

    /// Consumes the outcome, returning the path.
    pub fn into_path(self) -> Vec<Position> {
        match self {
            TargetOutcome::Reached(path) | TargetOutcome::Cancelled(path) => path,
        }
    }

    /// Whether the walk reached its target.
    pub fn reached(&self) -> bool {
        matches!(self, TargetOutcome::Reached(_))
    }
}

/// Iterator over the positions of a target-seeking walk.
///
/// Each `next()` draws one sample from the borrowed persistent generator,
/// applies the move rule, and yields the new position. Iteration ends after
/// the target has been yielded; if the walk starts on the target, nothing is
/// yielded at all. The stream is unbounded otherwise - callers impose their
/// own stopping rule (see [`CancelToken`]).
#[derive(Debug)]
pub struct TargetWalk<'a> {
    generator: &'a mut Lcg,
    dimensionality: Dimensionality,
    current: Position,
    target: Position,
    done: bool,
}

impl<'a> TargetWalk<'a> {
    /// Starts a walk at `source`. The caller has already checked that the
    /// dimensionalities match.
    pub(crate) fn new(generator: &'a mut Lcg, source: Position, target: Position) -> Self {
        let dimensionality = source.dimensionality();
        let done = source == target;
        Self {
            generator,
            dimensionality,
            current: source,
            target,
            done,
        }
    }

    /// The position the walk currently stands on.
    pub fn current(&self) -> &Position {
        &self.current
    }

    /// The position the walk is seeking.
    pub fn target(&self) -> &Position {
        &self.target
    }
}

impl Iterator for TargetWalk<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.done {
            return None;
        }
        let mv = self.dimensionality.select_move(self.generator.next_unit());
        self.current = self.current.apply(mv);
        if self.current == self.target {
            self.done = true;
        }
        Some(self.current.clone())
    }
}
