//! Embedded profile table
//!
//! Generated from oven.toml at build time; see build.rs.

use liquidus_core::config::OvenConfig;
use liquidus_core::profile::{Checkpoint, Profile};

include!(concat!(env!("OUT_DIR"), "/profile_data.rs"));

/// Build the run configuration from the embedded table
pub fn oven_config() -> OvenConfig {
    // A table too large for the profile capacity degrades to an empty
    // profile, which validation refuses at startup.
    let profile = Profile::from_checkpoints(PROFILE_TABLE).unwrap_or_else(Profile::new);

    OvenConfig {
        profile,
        min_rest_temp_c: MIN_REST_TEMP_C,
    }
}
