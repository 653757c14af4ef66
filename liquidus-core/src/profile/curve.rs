//! Piecewise-linear curve evaluation
//!
//! Maps elapsed time onto the target curve defined by a profile's
//! checkpoints.

use super::types::{Checkpoint, Profile};

/// Result of evaluating the curve at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CurvePoint {
    /// Interpolated target temperature (°C)
    pub target_c: f32,
    /// Elapsed time has reached or passed the final checkpoint
    pub past_end: bool,
}

/// Evaluate the target temperature at `t_s` seconds into the run
///
/// The segment containing `t_s` starts at the greatest checkpoint time
/// `<= t_s`, so a query landing exactly on a checkpoint returns that
/// checkpoint's stored temperature with no interpolation error. At or
/// past the final checkpoint the final temperature is held and
/// `past_end` is reported; evaluation is pure, so the one-way latch on
/// that flag is owned by the caller's run state.
///
/// Requires a non-empty profile that passed [`Profile::check`]; the
/// strict-increase invariant keeps every segment's time delta non-zero.
pub fn evaluate(profile: &Profile, t_s: u32) -> CurvePoint {
    let points = profile.checkpoints();

    // Greatest index with time <= t_s. Index 0 always qualifies because
    // a validated profile starts at t = 0.
    let mut idx = 0;
    for (i, point) in points.iter().enumerate() {
        if point.time_s <= t_s {
            idx = i;
        } else {
            break;
        }
    }

    if idx == points.len() - 1 {
        return CurvePoint {
            target_c: points[idx].temp_c,
            past_end: true,
        };
    }

    CurvePoint {
        target_c: interpolate(&points[idx], &points[idx + 1], t_s),
        past_end: false,
    }
}

/// Linear interpolation between two checkpoints
///
/// `progress` stays in [0, 1) because `a.time_s <= t_s < b.time_s`.
fn interpolate(a: &Checkpoint, b: &Checkpoint, t_s: u32) -> f32 {
    let span = (b.time_s - a.time_s) as f32;
    let progress = (t_s - a.time_s) as f32 / span;
    a.temp_c + progress * (b.temp_c - a.temp_c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::vec::Vec;

    fn reference_profile() -> Profile {
        Profile::from_checkpoints(&[
            Checkpoint::new(0, 15.0),
            Checkpoint::new(120, 150.0),
            Checkpoint::new(220, 183.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_start_is_exact() {
        let eval = evaluate(&reference_profile(), 0);
        assert_eq!(eval.target_c, 15.0);
        assert!(!eval.past_end);
    }

    #[test]
    fn test_midpoint_interpolation() {
        // 15 + (60/120) * (150 - 15) = 82.5
        let eval = evaluate(&reference_profile(), 60);
        assert_eq!(eval.target_c, 82.5);
        assert!(!eval.past_end);
    }

    #[test]
    fn test_interior_checkpoint_is_exact() {
        let eval = evaluate(&reference_profile(), 120);
        assert_eq!(eval.target_c, 150.0);
        assert!(!eval.past_end);
    }

    #[test]
    fn test_end_of_curve() {
        let eval = evaluate(&reference_profile(), 220);
        assert_eq!(eval.target_c, 183.0);
        assert!(eval.past_end);
    }

    #[test]
    fn test_past_end_holds_final_temperature() {
        for t in [221, 300, 10_000] {
            let eval = evaluate(&reference_profile(), t);
            assert_eq!(eval.target_c, 183.0);
            assert!(eval.past_end);
        }
    }

    #[test]
    fn test_descending_segment() {
        let profile = Profile::from_checkpoints(&[
            Checkpoint::new(0, 200.0),
            Checkpoint::new(100, 100.0),
        ])
        .unwrap();
        let eval = evaluate(&profile, 25);
        assert_eq!(eval.target_c, 175.0);
    }

    /// Build a structurally valid profile from positive time deltas.
    fn arb_profile() -> impl Strategy<Value = Profile> {
        (
            15.0f32..45.0,
            prop::collection::vec((1u32..=600, 20.0f32..260.0), 1..8),
        )
            .prop_map(|(first_temp, steps)| {
                let mut points = Vec::new();
                points.push(Checkpoint::new(0, first_temp));
                let mut t = 0u32;
                for (dt, temp) in steps {
                    t += dt;
                    points.push(Checkpoint::new(t, temp));
                }
                Profile::from_checkpoints(&points).unwrap()
            })
    }

    proptest! {
        #[test]
        fn prop_checkpoints_evaluate_exactly(profile in arb_profile()) {
            prop_assert!(profile.is_valid(0.0));
            for cp in profile.checkpoints() {
                let eval = evaluate(&profile, cp.time_s);
                prop_assert_eq!(eval.target_c, cp.temp_c);
            }
        }

        #[test]
        fn prop_terminal_state_is_idempotent(profile in arb_profile(), extra in 0u32..5_000) {
            let end = profile.duration_s();
            let final_temp = profile.checkpoints()[profile.len() - 1].temp_c;

            let eval = evaluate(&profile, end + extra);
            prop_assert!(eval.past_end);
            prop_assert_eq!(eval.target_c, final_temp);
        }

        #[test]
        fn prop_before_end_is_not_terminal(profile in arb_profile()) {
            let end = profile.duration_s();
            for t in 0..end.min(1_000) {
                let eval = evaluate(&profile, t);
                prop_assert!(!eval.past_end);
            }
        }
    }
}
