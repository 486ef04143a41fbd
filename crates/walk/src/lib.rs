#![deny(unsafe_code)]
//! Lattice walk engine: fixed-length and target-seeking walks.
//!
//! A [`Walker`] owns the system's two generator lifecycles (a
//! reseeded-per-call batch counter and a persistent generator) and runs
//! walks against them; [`TargetWalk`] exposes target-seeking walks as a
//! cancellable lazy stream, and [`WalkSession`] records a finished request
//! for serialization.

pub mod session;
pub mod target;
pub mod walker;

pub use session::WalkSession;
pub use target::{CancelToken, TargetOutcome, TargetWalk};
pub use walker::Walker;
