//! Run-mode state machine
//!
//! A run either executes a validated profile or refuses a malformed
//! one. Refusal is terminal: an unattended heating process must never
//! run against a profile that failed validation, and it must keep
//! saying so rather than fail silently.

use crate::profile::ProfileError;

/// Controller run modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Startup: profile not yet checked, no control activity permitted
    Validating,
    /// Profile accepted, control ticks active
    Running,
    /// Profile rejected; report and alert every tick, never actuate
    Refused(ProfileError),
}

impl Mode {
    /// Resolve a validation result into the run mode
    ///
    /// This is the only transition out of `Validating`, and both
    /// destinations are final for the run.
    pub fn after_validation(result: Result<(), ProfileError>) -> Self {
        match result {
            Ok(()) => Mode::Running,
            Err(e) => Mode::Refused(e),
        }
    }

    /// Check if this mode allows heater actuation
    pub fn heater_allowed(&self) -> bool {
        matches!(self, Mode::Running)
    }

    /// Check if the profile was rejected
    pub fn is_refused(&self) -> bool {
        matches!(self, Mode::Refused(_))
    }
}
