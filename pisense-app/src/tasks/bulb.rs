//! Lamp controller

use std::sync::atomic::AtomicBool;

use chrono::{Local, Timelike};
use pisense_core::bulb::BulbController;
use pisense_core::config::SystemConfig;
use pisense_core::routines::run_bulb_monitor;
use pisense_hal_linux::Delay;

use crate::board;
use crate::error::AppError;

/// Drive the lamp from the light level and the local time until interrupted
pub fn bulb_task(config: &SystemConfig, stop: &AtomicBool) -> Result<(), AppError> {
    let bulb = &config.bulb;
    let mut adc = board::open_adc(config)?;
    let mut output = board::open_output(config, bulb.pin)?;
    let mut controller = BulbController::new(bulb.mode, bulb.manual_state);

    log::info!(
        "Bulb monitor on line {} ({:?} mode, every {} s)",
        bulb.pin,
        bulb.mode,
        bulb.interval_s
    );

    run_bulb_monitor(
        &mut adc,
        config.photoresistor.channel,
        &mut output,
        &mut controller,
        &mut Delay,
        bulb.interval(),
        stop,
        // hour() is always below 24
        || Local::now().hour() as u8,
        |light, state| println!("Light {} ({}), bulb {}", light, light.status(), state),
    )?;
    Ok(())
}
