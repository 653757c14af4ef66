//! Per-tick control engine
//!
//! One tick in the running mode: read the measured temperature,
//! evaluate the target curve, drive the heater with the bang-bang law,
//! report status, advance the clock by one second. The tick never
//! terminates the run; cadence and the run-forever contract belong to
//! the caller's loop.

use core::fmt::Write;

use heapless::String;

use super::mode::Mode;
use crate::profile::{evaluate, Profile};
use crate::traits::{HeaterOutput, StatusReport, TemperatureSensor};

/// Maximum status line length
const LINE_CAP: usize = 64;

/// Run clock and completion latch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunState {
    /// Seconds since profile start, advanced exactly once per tick
    pub elapsed_s: u32,
    /// Latched once elapsed time reaches the final checkpoint; never
    /// cleared for the remainder of the run
    pub past_end: bool,
}

impl RunState {
    /// Fresh run state at t = 0
    pub const fn new() -> Self {
        Self {
            elapsed_s: 0,
            past_end: false,
        }
    }
}

/// Bang-bang actuation decision
///
/// On strictly below target, off at or above it. This comparison is the
/// entire control law: no hysteresis, no integral or derivative term,
/// no rate limiting.
pub fn heater_demand(target_c: f32, measured_c: f32) -> bool {
    measured_c < target_c
}

/// Single-zone profile controller
///
/// Owns the profile read-only for the duration of the run and drives
/// the three collaborators once per [`tick`]. Construction leaves the
/// controller in `Validating`; the first tick resolves it into
/// `Running` or the terminal `Refused`.
///
/// [`tick`]: Controller::tick
pub struct Controller<S, H, R> {
    profile: Profile,
    min_rest_temp_c: f32,
    mode: Mode,
    run: RunState,
    sensor: S,
    heater: H,
    status: R,
}

impl<S, H, R> Controller<S, H, R>
where
    S: TemperatureSensor,
    H: HeaterOutput,
    R: StatusReport,
{
    /// Create a controller for one run
    pub fn new(profile: Profile, min_rest_temp_c: f32, sensor: S, heater: H, status: R) -> Self {
        Self {
            profile,
            min_rest_temp_c,
            mode: Mode::Validating,
            run: RunState::new(),
            sensor,
            heater,
            status,
        }
    }

    /// Current run mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current run clock and completion latch
    pub fn run_state(&self) -> RunState {
        self.run
    }

    /// Get access to the underlying heater
    pub fn heater(&self) -> &H {
        &self.heater
    }

    /// Execute one control tick
    ///
    /// The first tick validates the profile; every later tick acts on
    /// the resolved mode. In `Refused` no sensor is read and no
    /// actuation happens: the tick only alerts and repeats the refusal
    /// line, forever.
    pub fn tick(&mut self) {
        if self.mode == Mode::Validating {
            self.mode = Mode::after_validation(self.profile.check(self.min_rest_temp_c));
        }

        match self.mode {
            // Resolved above; nothing to do on a tick that never runs
            Mode::Validating => {}
            Mode::Running => self.tick_running(),
            Mode::Refused(err) => {
                self.status.alert();
                self.status.write_line(err.message());
            }
        }
    }

    fn tick_running(&mut self) {
        let measured_c = self.sensor.read_celsius();
        let point = evaluate(&self.profile, self.run.elapsed_s);

        // One-way latch; evaluation is pure and never clears it
        self.run.past_end |= point.past_end;

        self.heater.set_on(heater_demand(point.target_c, measured_c));

        if self.run.past_end {
            self.status.alert();
        }
        let mut line: String<LINE_CAP> = String::new();
        let _ = write!(
            line,
            "{},{:.1},{:.1}",
            self.run.elapsed_s, point.target_c, measured_c
        );
        self.status.write_line(&line);

        self.run.elapsed_s = self.run.elapsed_s.saturating_add(1);
    }
}
