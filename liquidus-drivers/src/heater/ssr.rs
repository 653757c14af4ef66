//! Solid-state relay heater output
//!
//! Drives the oven's heating element through an SSR (or relay/MOSFET)
//! on a GPIO pin, active-high or active-low.

use embedded_hal::digital::OutputPin;

use liquidus_core::traits::HeaterOutput;

/// SSR heater output
///
/// Controls the heating element via a GPIO pin. The pin can be
/// configured as active-high (default) or active-low.
pub struct SsrHeater<P> {
    pin: P,
    /// If true, heater ON = pin LOW
    inverted: bool,
    /// Current logical state (true = heater on)
    on: bool,
}

impl<P: OutputPin> SsrHeater<P> {
    /// Create a new SSR heater output
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, heater is ON when pin is LOW (for active-low SSRs)
    ///
    /// The element always starts off.
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut heater = Self {
            pin,
            inverted,
            on: false,
        };
        heater.set_on(false);
        heater
    }

    /// Create a new SSR heater with active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new SSR heater with active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> HeaterOutput for SsrHeater<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;

        // GPIO writes on these targets are infallible
        if on != self.inverted {
            let _ = self.pin.set_high();
        } else {
            let _ = self.pin.set_low();
        }
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
