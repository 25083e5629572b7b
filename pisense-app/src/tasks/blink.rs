//! LED blink

use std::sync::atomic::AtomicBool;

use pisense_core::config::SystemConfig;
use pisense_core::routines::{run_blink, BlinkEvent, Outcome};
use pisense_hal_linux::Delay;

use crate::board;
use crate::error::AppError;

pub fn blink_task(config: &SystemConfig, stop: &AtomicBool) -> Result<(), AppError> {
    let mut led = board::open_output(config, config.blink.pin)?;

    let outcome = run_blink(&mut led, &mut Delay, &config.blink, stop, |event| {
        match event {
            BlinkEvent::TurningOn => println!("LED turning on"),
            BlinkEvent::TurningOff => println!("LED turning off"),
        }
    })?;
    if outcome == Outcome::Stopped {
        log::debug!("Blink interrupted, LED left off");
    }
    Ok(())
}
