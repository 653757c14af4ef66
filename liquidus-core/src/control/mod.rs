//! Control engine
//!
//! The run-mode state machine and the per-tick controller that composes
//! the sensor, heater, and status collaborators.

pub mod mode;
pub mod tick;

pub use mode::Mode;
pub use tick::{heater_demand, Controller, RunState};
