//! Firmware status console
//!
//! Serial status lines plus a GPIO buzzer pulse as the audible
//! attention signal.

use embassy_rp::gpio::Output;
use embassy_time::{block_for, Duration};
use embedded_io::Write;

use liquidus_core::traits::StatusReport;
use liquidus_drivers::status::SerialStatus;

/// Buzzer pulse length in milliseconds
const BEEP_MS: u64 = 80;

/// Status console combining the serial channel with a buzzer
pub struct Console<W> {
    serial: SerialStatus<W>,
    buzzer: Output<'static>,
}

impl<W: Write> Console<W> {
    /// Create a new console
    ///
    /// `buzzer` must be configured low (silent).
    pub fn new(serial: SerialStatus<W>, buzzer: Output<'static>) -> Self {
        Self { serial, buzzer }
    }
}

impl<W: Write> StatusReport for Console<W> {
    fn write_line(&mut self, line: &str) {
        self.serial.write_line(line);
    }

    fn alert(&mut self) {
        self.serial.alert();

        // Short blocking pulse; the tick budget is a full second
        self.buzzer.set_high();
        block_for(Duration::from_millis(BEEP_MS));
        self.buzzer.set_low();
    }
}
