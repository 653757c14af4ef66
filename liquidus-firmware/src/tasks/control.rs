//! Control loop task
//!
//! One control tick per second, forever. All decisions live in
//! `liquidus-core`; this task only provides the cadence.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::{SPI0, UART0};
use embassy_rp::spi;
use embassy_rp::uart;
use embassy_time::{Duration, Ticker};

use liquidus_core::config::TICK_PERIOD_S;
use liquidus_core::control::Controller;
use liquidus_drivers::heater::SsrHeater;
use liquidus_drivers::sensor::Max6675;

use crate::report::Console;

/// Concrete peripheral types for the control task
pub type OvenSensor = Max6675<spi::Spi<'static, SPI0, spi::Blocking>, Output<'static>>;
pub type OvenHeater = SsrHeater<Output<'static>>;
pub type OvenConsole = Console<uart::Uart<'static, UART0, uart::Blocking>>;
pub type OvenController = Controller<OvenSensor, OvenHeater, OvenConsole>;

/// Control task
///
/// There is no termination condition: the oven runs until external
/// power-off. Reaching the end of the curve only changes the reported
/// status, and a refused profile keeps the task alerting forever.
#[embassy_executor::task]
pub async fn control_task(mut controller: OvenController) {
    info!("Control task started");

    let mut ticker = Ticker::every(Duration::from_secs(TICK_PERIOD_S as u64));

    loop {
        controller.tick();
        ticker.next().await;
    }
}
