//! Temperature profiles
//!
//! A profile is the ordered sequence of (time, temperature) checkpoints
//! the oven must drive the board through, plus the piecewise-linear
//! evaluation that maps elapsed time onto it.

pub mod curve;
pub mod types;

pub use curve::{evaluate, CurvePoint};
pub use types::{Checkpoint, Profile, ProfileError, MAX_CHECKPOINTS};
