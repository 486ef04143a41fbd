//! The walk engine and its two generator lifecycles.
//!
//! A [`Walker`] owns both sources of randomness the system uses:
//!
//! - a **batch seed counter**: every fixed-length walk builds a fresh,
//!   short-lived generator from the counter's current value, and the counter
//!   then advances by [`RESEED_INCREMENT`] once per request;
//! - a **persistent generator**: built once in [`Walker::new`] and never
//!   reconstructed, so consecutive target-seeking walks continue a single
//!   underlying sequence.
//!
//! A target-seeking walk *also* advances the batch seed counter before it
//! starts sampling. That bump never touches the persistent generator; it
//! only shifts where the next fixed-length walk starts. The asymmetry is
//! part of the observable contract and is kept deliberately.

use crate::target::{CancelToken, TargetOutcome, TargetWalk};
use lattice_walk_core::{Lcg, LcgParams, Position, WalkError, REFERENCE_SEED, RESEED_INCREMENT};
use serde::{Deserialize, Serialize};

/// Runs lattice walks against a pair of explicitly owned generator
/// lifecycles.
///
/// Serializable, so a caller can checkpoint both lifecycles mid-session and
/// resume the exact sequences later. There is no internal locking; callers
/// walking from multiple threads serialize access themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Walker {
    params: LcgParams,
    batch_seed: u64,
    persistent: Lcg,
}

impl Walker {
    /// Creates a walker whose batch counter and persistent generator both
    /// start from `seed`.
    pub fn new(params: LcgParams, seed: u64) -> Self {
        Self {
            params,
            batch_seed: seed,
            persistent: params.generator(seed),
        }
    }

    /// Creates a walker with the reference parameters and seed 42.
    pub fn reference() -> Self {
        Self::new(LcgParams::REFERENCE, REFERENCE_SEED)
    }

    /// Current value of the batch seed counter.
    pub fn batch_seed(&self) -> u64 {
        self.batch_seed
    }

    /// State of the persistent generator.
    pub fn persistent_state(&self) -> u64 {
        self.persistent.state()
    }

    /// Runs a fixed-length walk of exactly `steps` moves from `source`.
    ///
    /// A fresh generator is built from the batch seed counter, all `steps`
    /// samples are drawn up front, and the counter advances by
    /// [`RESEED_INCREMENT`] once, unconditionally (a zero-step walk still
    /// bumps it). The returned path has `steps + 1` positions with the
    /// source at index 0.
    pub fn fixed_walk(&mut self, steps: usize, source: Position) -> Vec<Position> {
        let mut generator = self.params.generator(self.batch_seed);
        let samples: Vec<f64> = (0..steps).map(|_| generator.next_unit()).collect();
        self.batch_seed = self.batch_seed.wrapping_add(RESEED_INCREMENT);

        let dimensionality = source.dimensionality();
        let mut path = Vec::with_capacity(steps + 1);
        let mut current = source;
        path.push(current.clone());
        for sample in samples {
            current = current.apply(dimensionality.select_move(sample));
            path.push(current.clone());
        }
        path
    }

    /// Runs a target-seeking walk from `source`, drawing from the
    /// persistent generator until the target is reached componentwise or
    /// `cancel` fires.
    ///
    /// The batch seed counter is bumped once before sampling begins - a
    /// side effect on the *other* lifecycle only. The walk has no step
    /// budget; `cancel` is checked cooperatively before every move and a
    /// cancelled walk returns the partial path produced so far.
    ///
    /// Returns `WalkError::DimensionalityMismatch` (before any state is
    /// mutated) if `source` and `target` have different axis counts.
    pub fn target_walk(
        &mut self,
        source: Position,
        target: Position,
        cancel: &CancelToken,
    ) -> Result<TargetOutcome, WalkError> {
        let mut walk = self.target_walk_iter(source.clone(), target)?;
        let mut path = vec![source];
        loop {
            if cancel.is_cancelled() {
                return Ok(TargetOutcome::Cancelled(path));
            }
            match walk.next() {
                Some(position) => path.push(position),
                None => return Ok(TargetOutcome::Reached(path)),
            }
        }
    }

    /// Starts a target-seeking walk as a lazy position stream.
    ///
    /// Validates the dimensionalities, bumps the batch seed counter exactly
    /// as [`Walker::target_walk`] does, and returns an iterator that draws
    /// one persistent-generator sample per element. The iterator does not
    /// yield the source itself; it ends after yielding the target.
    pub fn target_walk_iter(
        &mut self,
        source: Position,
        target: Position,
    ) -> Result<TargetWalk<'_>, WalkError> {
        if source.dimensionality() != target.dimensionality() {
            return Err(WalkError::DimensionalityMismatch {
                lhs: source.dimensionality().axes(),
                rhs: target.dimensionality().axes(),
            });
        }
        self.batch_seed = self.batch_seed.wrapping_add(RESEED_INCREMENT);
        Ok(TargetWalk::new(&mut self.persistent, source, target))
    }
}
