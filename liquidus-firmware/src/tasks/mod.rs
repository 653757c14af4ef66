//! Embassy tasks

pub mod control;

pub use control::control_task;
