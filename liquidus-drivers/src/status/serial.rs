//! Serial status reporter
//!
//! Writes one CR/LF-terminated status line per tick over any blocking
//! `embedded-io` writer, and uses ASCII BEL as the attention signal.

use embedded_io::Write;

use liquidus_core::traits::StatusReport;

/// ASCII bell
const BEL: u8 = 0x07;

/// Status reporter over a serial byte channel
pub struct SerialStatus<W> {
    uart: W,
}

impl<W: Write> SerialStatus<W> {
    /// Create a new serial status reporter
    pub fn new(uart: W) -> Self {
        Self { uart }
    }

    /// Access the underlying writer
    pub fn writer(&mut self) -> &mut W {
        &mut self.uart
    }
}

impl<W: Write> StatusReport for SerialStatus<W> {
    fn write_line(&mut self, line: &str) {
        // A dropped status line must not stall the control tick
        let _ = self.uart.write_all(line.as_bytes());
        let _ = self.uart.write_all(b"\r\n");
    }

    fn alert(&mut self) {
        let _ = self.uart.write_all(&[BEL]);
    }
}
