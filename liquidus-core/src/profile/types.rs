//! Profile checkpoints and validation
//!
//! Profiles are supplied at configuration time and never mutated during
//! a run. A profile that fails validation is terminal: the controller
//! must never interpolate or actuate against it.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum checkpoints per profile
///
/// Capacity bound only; all behavior depends on the actual length.
pub const MAX_CHECKPOINTS: usize = 32;

/// One (time, temperature) anchor on the target curve
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Checkpoint {
    /// Seconds from profile start
    pub time_s: u32,
    /// Target temperature at this time (°C)
    pub temp_c: f32,
}

impl Checkpoint {
    /// Create a checkpoint
    pub const fn new(time_s: u32, temp_c: f32) -> Self {
        Self { time_s, temp_c }
    }
}

/// Reasons a profile fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProfileError {
    /// No checkpoints at all
    Empty,
    /// Fewer than two checkpoints, so there is no segment to follow
    TooShort,
    /// First checkpoint is not at t = 0
    StartNotZero,
    /// Checkpoint times do not strictly increase
    TimesNotIncreasing,
    /// Final temperature is below the safe resting minimum
    RestTempTooLow,
}

impl ProfileError {
    /// Short description for status lines
    pub fn message(&self) -> &'static str {
        match self {
            ProfileError::Empty => "profile rejected: no checkpoints",
            ProfileError::TooShort => "profile rejected: fewer than two checkpoints",
            ProfileError::StartNotZero => "profile rejected: first checkpoint not at t=0",
            ProfileError::TimesNotIncreasing => {
                "profile rejected: checkpoint times must strictly increase"
            }
            ProfileError::RestTempTooLow => {
                "profile rejected: final temperature below safe resting minimum"
            }
        }
    }
}

/// Ordered checkpoint sequence defining the full process curve
///
/// The sequence is read-only for the lifetime of a run. Call [`check`]
/// (or [`is_valid`]) before using a profile for control.
///
/// [`check`]: Profile::check
/// [`is_valid`]: Profile::is_valid
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Profile {
    points: Vec<Checkpoint, MAX_CHECKPOINTS>,
}

impl Profile {
    /// Create an empty profile (invalid until checkpoints are added)
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a profile from a checkpoint slice
    ///
    /// Returns `None` if the slice exceeds [`MAX_CHECKPOINTS`]. The
    /// result is not validated; call [`Profile::check`] before using it
    /// for control.
    pub fn from_checkpoints(points: &[Checkpoint]) -> Option<Self> {
        let mut profile = Self::new();
        for p in points {
            profile.points.push(*p).ok()?;
        }
        Some(profile)
    }

    /// Append a checkpoint
    ///
    /// Returns the checkpoint back if the profile is full.
    pub fn push(&mut self, point: Checkpoint) -> Result<(), Checkpoint> {
        self.points.push(point)
    }

    /// Checkpoints in order
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.points
    }

    /// Number of checkpoints
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the profile has no checkpoints
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Time of the last checkpoint (0 for an empty profile)
    pub fn duration_s(&self) -> u32 {
        self.points.last().map(|c| c.time_s).unwrap_or(0)
    }

    /// Check structural well-formedness
    ///
    /// Verifies, short-circuiting on the first violation:
    /// - at least two checkpoints
    /// - first checkpoint at t = 0
    /// - strictly increasing times (every segment non-degenerate)
    /// - final temperature at or above `min_rest_temp_c`
    ///
    /// Pure function of its input; never panics.
    pub fn check(&self, min_rest_temp_c: f32) -> Result<(), ProfileError> {
        let first = match self.points.first() {
            Some(first) => first,
            None => return Err(ProfileError::Empty),
        };

        if self.points.len() < 2 {
            return Err(ProfileError::TooShort);
        }

        if first.time_s != 0 {
            return Err(ProfileError::StartNotZero);
        }

        for pair in self.points.windows(2) {
            if pair[1].time_s <= pair[0].time_s {
                return Err(ProfileError::TimesNotIncreasing);
            }
        }

        let last = &self.points[self.points.len() - 1];
        if last.temp_c < min_rest_temp_c {
            return Err(ProfileError::RestTempTooLow);
        }

        Ok(())
    }

    /// Boolean form of [`Profile::check`]
    pub fn is_valid(&self, min_rest_temp_c: f32) -> bool {
        self.check(min_rest_temp_c).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(points: &[Checkpoint]) -> Profile {
        Profile::from_checkpoints(points).unwrap()
    }

    #[test]
    fn test_valid_profile() {
        let p = profile(&[
            Checkpoint::new(0, 15.0),
            Checkpoint::new(120, 150.0),
            Checkpoint::new(220, 183.0),
        ]);
        assert_eq!(p.check(70.0), Ok(()));
        assert!(p.is_valid(70.0));
        assert_eq!(p.duration_s(), 220);
    }

    #[test]
    fn test_empty_profile_rejected() {
        let p = Profile::new();
        assert_eq!(p.check(70.0), Err(ProfileError::Empty));
    }

    #[test]
    fn test_single_checkpoint_rejected() {
        let p = profile(&[Checkpoint::new(0, 100.0)]);
        assert_eq!(p.check(70.0), Err(ProfileError::TooShort));
    }

    #[test]
    fn test_nonzero_start_rejected() {
        let p = profile(&[Checkpoint::new(10, 15.0), Checkpoint::new(120, 150.0)]);
        assert_eq!(p.check(70.0), Err(ProfileError::StartNotZero));
    }

    #[test]
    fn test_duplicate_times_rejected() {
        let p = profile(&[Checkpoint::new(0, 15.0), Checkpoint::new(0, 150.0)]);
        assert_eq!(p.check(70.0), Err(ProfileError::TimesNotIncreasing));
    }

    #[test]
    fn test_regressing_times_rejected() {
        let p = profile(&[
            Checkpoint::new(0, 15.0),
            Checkpoint::new(120, 150.0),
            Checkpoint::new(60, 183.0),
        ]);
        assert_eq!(p.check(70.0), Err(ProfileError::TimesNotIncreasing));
    }

    #[test]
    fn test_low_rest_temperature_rejected() {
        let p = profile(&[Checkpoint::new(0, 15.0), Checkpoint::new(120, 50.0)]);
        assert_eq!(p.check(70.0), Err(ProfileError::RestTempTooLow));

        // Exactly at the minimum is accepted
        let p = profile(&[Checkpoint::new(0, 15.0), Checkpoint::new(120, 70.0)]);
        assert_eq!(p.check(70.0), Ok(()));
    }

    #[test]
    fn test_capacity_bound() {
        let mut p = Profile::new();
        for i in 0..MAX_CHECKPOINTS as u32 {
            p.push(Checkpoint::new(i, 100.0)).unwrap();
        }
        assert!(p.push(Checkpoint::new(99, 100.0)).is_err());
    }
}
