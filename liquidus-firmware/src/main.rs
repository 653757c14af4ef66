//! Liquidus - Reflow Oven Controller Firmware
//!
//! Main firmware binary for RP2040-based single-zone reflow ovens.
//! Drives the oven along an embedded temperature-vs-time profile with
//! 1 Hz bang-bang control.
//!
//! Named after the liquidus point - the temperature at which solder
//! alloy becomes fully molten.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Spi};
use embassy_rp::uart::{self, Uart};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use liquidus_drivers::heater::SsrHeater;
use liquidus_drivers::sensor::Max6675;
use liquidus_drivers::status::SerialStatus;

use liquidus_core::control::Controller;

use crate::report::Console;

mod profile_table;
mod report;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Liquidus firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Embedded profile configuration. The controller re-validates it at
    // startup; a rejected profile leaves the oven refusing forever.
    let config = profile_table::oven_config();
    info!(
        "Profile: {} checkpoints over {} s, min rest temp {} °C",
        config.profile.len(),
        config.profile.duration_s(),
        config.min_rest_temp_c
    );

    // SPI0 for the MAX6675 thermocouple converter
    // Pin assignments: SCK=GPIO18, MISO=GPIO16, CS=GPIO17
    let mut spi_config = spi::Config::default();
    spi_config.frequency = 1_000_000;
    let spi = Spi::new_blocking_rxonly(p.SPI0, p.PIN_18, p.PIN_16, spi_config);
    let cs = Output::new(p.PIN_17, Level::High);
    let sensor = Max6675::new(spi, cs);

    info!("Thermocouple SPI initialized");

    // Heater SSR on GPIO23, active high
    let heater = SsrHeater::new_active_high(Output::new(p.PIN_23, Level::Low));

    // UART0 status channel (115200 baud default) plus buzzer on GPIO22
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart::Config::default());
    let buzzer = Output::new(p.PIN_22, Level::Low);
    let console = Console::new(SerialStatus::new(uart), buzzer);

    info!("Status UART and buzzer initialized");

    let controller = Controller::new(
        config.profile,
        config.min_rest_temp_c,
        sensor,
        heater,
        console,
    );

    spawner.spawn(tasks::control_task(controller)).unwrap();
    info!("Control task spawned, firmware running");

    // Main task has nothing else to do - all work happens in the
    // control task
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
