//! Oven configuration types
//!
//! The profile and the safety threshold are supplied at startup and
//! fixed for the whole run; there is no runtime reconfiguration
//! surface.

use crate::profile::Profile;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default minimum allowed final profile temperature (°C)
///
/// Profiles that end below the configured minimum are rejected.
pub const DEFAULT_MIN_REST_TEMP_C: f32 = 70.0;

/// Sampling cadence: one control tick per second
pub const TICK_PERIOD_S: u32 = 1;

/// Oven configuration for one run
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OvenConfig {
    /// Target curve for the run
    pub profile: Profile,
    /// Minimum allowed final profile temperature (°C)
    pub min_rest_temp_c: f32,
}

impl Default for OvenConfig {
    fn default() -> Self {
        Self {
            profile: Profile::new(),
            min_rest_temp_c: DEFAULT_MIN_REST_TEMP_C,
        }
    }
}
