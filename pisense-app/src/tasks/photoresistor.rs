//! Photoresistor light level

use std::sync::atomic::AtomicBool;

use pisense_core::config::SystemConfig;
use pisense_core::routines::sample_light;

use crate::board;
use crate::error::AppError;

/// Print the raw light level
///
/// Prints nothing if interrupted before the reading is taken.
pub fn photoresistor_task(
    config: &SystemConfig,
    status: bool,
    stop: &AtomicBool,
) -> Result<(), AppError> {
    let mut adc = board::open_adc(config)?;
    let Some(light) = sample_light(&mut adc, config.photoresistor.channel, stop)? else {
        log::debug!("Photoresistor interrupted");
        return Ok(());
    };

    println!("{}", light);
    if status {
        log::info!("Light status: {}", light.status());
    }
    Ok(())
}
