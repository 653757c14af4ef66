//! MAX6675 K-type thermocouple converter
//!
//! 12-bit cold-junction-compensated converter, 0.25 °C per LSB over
//! 0-1023.75 °C. A conversion takes ~220 ms, well inside the oven's
//! 1 s sampling cadence.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use liquidus_core::traits::TemperatureSensor;

/// Open-thermocouple flag, bit D2 of the frame
const OPEN_FLAG: u16 = 1 << 2;

/// Faults readable from a MAX6675 transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorFault {
    /// Thermocouple disconnected (D2 set in the frame)
    OpenThermocouple,
    /// SPI transfer or chip-select error
    Bus,
}

/// MAX6675 driver over a raw SPI bus with a dedicated chip-select pin
///
/// The converter has no writable registers; pulling chip select low
/// clocks out one 16-bit frame.
pub struct Max6675<SPI, CS> {
    spi: SPI,
    cs: CS,
    /// Last good reading, held across transient faults
    last_c: f32,
}

impl<SPI: SpiBus, CS: OutputPin> Max6675<SPI, CS> {
    /// Create a new MAX6675 driver
    ///
    /// `cs` must be configured high (deselected).
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self {
            spi,
            cs,
            last_c: 0.0,
        }
    }

    /// Read one frame and decode it to degrees Celsius
    pub fn read(&mut self) -> Result<f32, SensorFault> {
        let mut frame = [0u8; 2];

        self.cs.set_low().map_err(|_| SensorFault::Bus)?;
        let transfer = self.spi.read(&mut frame);
        // Release chip select even after a failed transfer
        self.cs.set_high().map_err(|_| SensorFault::Bus)?;
        transfer.map_err(|_| SensorFault::Bus)?;

        decode_frame(u16::from_be_bytes(frame))
    }
}

/// Decode a MAX6675 frame
///
/// Frame layout: D15 dummy, D14-D3 temperature counts, D2 open
/// thermocouple flag, D1 device ID, D0 tri-state.
fn decode_frame(frame: u16) -> Result<f32, SensorFault> {
    if frame & OPEN_FLAG != 0 {
        return Err(SensorFault::OpenThermocouple);
    }

    let counts = (frame >> 3) & 0x0FFF;
    Ok(counts as f32 * 0.25)
}

impl<SPI: SpiBus, CS: OutputPin> TemperatureSensor for Max6675<SPI, CS> {
    fn read_celsius(&mut self) -> f32 {
        // The control loop takes a single trusted reading per tick;
        // hold the last good value across a transient fault.
        if let Ok(temp_c) = self.read() {
            self.last_c = temp_c;
        }
        self.last_c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    /// Mock SPI bus that replays a fixed frame
    struct MockBus {
        frame: u16,
    }

    impl embedded_hal::spi::ErrorType for MockBus {
        type Error = Infallible;
    }

    impl SpiBus for MockBus {
        fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            words.copy_from_slice(&self.frame.to_be_bytes());
            Ok(())
        }

        fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn transfer(&mut self, read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            read.copy_from_slice(&self.frame.to_be_bytes());
            Ok(())
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    /// Mock chip-select pin tracking its level
    struct MockPin {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    fn sensor(frame: u16) -> Max6675<MockBus, MockPin> {
        Max6675::new(MockBus { frame }, MockPin { high: true })
    }

    #[test]
    fn test_decode_quarter_degree_counts() {
        // 100.00 °C = 400 counts, shifted into D14-D3
        let mut s = sensor(400 << 3);
        assert_eq!(s.read().unwrap(), 100.0);

        // 25.25 °C = 101 counts
        let mut s = sensor(101 << 3);
        assert_eq!(s.read().unwrap(), 25.25);
    }

    #[test]
    fn test_open_thermocouple_flag() {
        let mut s = sensor((400 << 3) | OPEN_FLAG);
        assert_eq!(s.read(), Err(SensorFault::OpenThermocouple));
    }

    #[test]
    fn test_chip_select_released_after_read() {
        let mut s = sensor(400 << 3);
        s.read().unwrap();
        assert!(s.cs.high);
    }

    #[test]
    fn test_holds_last_reading_across_fault() {
        let mut s = sensor(400 << 3);
        assert_eq!(s.read_celsius(), 100.0);

        // Thermocouple pops loose; reading holds rather than dropping to 0
        s.spi.frame = (400 << 3) | OPEN_FLAG;
        assert_eq!(s.read_celsius(), 100.0);

        // Recovers when the fault clears
        s.spi.frame = 200 << 3;
        assert_eq!(s.read_celsius(), 50.0);
    }
}
