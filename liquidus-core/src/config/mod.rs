//! Configuration type definitions

pub mod types;

pub use types::{OvenConfig, DEFAULT_MIN_REST_TEMP_C, TICK_PERIOD_S};
