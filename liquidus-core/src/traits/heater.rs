//! Heater output trait

/// Trait for heater output control
///
/// Implementations control the heating element via GPIO, SSR, or relay.
/// `set_on` is idempotent and is assumed to take effect before the next
/// tick's decision.
pub trait HeaterOutput {
    /// Turn the heater on or off
    fn set_on(&mut self, on: bool);

    /// Check if the heater is currently on
    fn is_on(&self) -> bool;
}
