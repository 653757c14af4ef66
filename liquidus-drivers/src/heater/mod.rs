//! Heater output drivers

pub mod ssr;

pub use ssr::SsrHeater;
