//! Hardware driver implementations for the Liquidus reflow oven
//!
//! Drivers implement the hardware traits from `liquidus-core` on top of
//! `embedded-hal` / `embedded-io` peripherals:
//!
//! - MAX6675 K-type thermocouple converter (SPI)
//! - Solid-state relay heater output (GPIO)
//! - Serial status reporter (UART)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod heater;
pub mod sensor;
pub mod status;
