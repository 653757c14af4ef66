//! Status reporting drivers

pub mod serial;

pub use serial::SerialStatus;
