//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic and
//! hardware-specific implementations.

pub mod heater;
pub mod sensor;
pub mod status;

pub use heater::HeaterOutput;
pub use sensor::TemperatureSensor;
pub use status::StatusReport;
