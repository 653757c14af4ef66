//! Board-agnostic core logic for the reflow oven controller
//!
//! This crate contains all control logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (sensor, heater, status channel)
//! - Profile checkpoints and validation
//! - Piecewise-linear curve evaluation
//! - The per-tick control engine and run-mode state machine
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod control;
pub mod profile;
pub mod traits;
