//! PIR motion watch

use std::sync::atomic::AtomicBool;

use pisense_core::config::SystemConfig;
use pisense_core::routines::watch_motion;

use crate::board;
use crate::error::AppError;

/// Print a line for every detected motion until interrupted
pub fn motion_task(config: &SystemConfig, stop: &AtomicBool) -> Result<(), AppError> {
    let mut pir = board::open_pir(config)?;
    log::info!("Watching for motion on line {}", config.motion.pin);

    watch_motion(&mut pir, config.motion.wait_timeout(), stop, |_| {
        println!("Movement detected")
    })?;
    Ok(())
}
