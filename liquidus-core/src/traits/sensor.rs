//! Temperature sensor trait

/// Trait for temperature sensors
///
/// Implementations handle the specific sensor type (thermocouple, NTC
/// thermistor, PT100, etc.) including any fault handling the hardware
/// needs. The control loop trusts the returned reading as-is; the
/// temperature unit is fixed at configuration and must match the unit
/// used by the profile.
pub trait TemperatureSensor {
    /// Read the current temperature in degrees Celsius
    ///
    /// Takes `&mut self` because SPI/ADC reads typically require
    /// mutable access.
    fn read_celsius(&mut self) -> f32;
}
