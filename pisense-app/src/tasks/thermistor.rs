//! Thermistor temperature

use std::sync::atomic::AtomicBool;

use pisense_core::config::SystemConfig;
use pisense_core::routines::{read_temperature, run_thermometer, Outcome};
use pisense_hal_linux::Delay;

use crate::board;
use crate::error::AppError;

/// Print the temperature once, or every interval until interrupted
///
/// The single reading is printed bare for consumption by other programs.
pub fn thermistor_task(
    config: &SystemConfig,
    once: bool,
    stop: &AtomicBool,
) -> Result<(), AppError> {
    let mut adc = board::open_adc(config)?;
    let thermistor = &config.thermistor;

    if once {
        let celsius = read_temperature(&mut adc, thermistor.channel, &thermistor.model)?;
        println!("{:?}", celsius);
        return Ok(());
    }

    let outcome = run_thermometer(&mut adc, &mut Delay, thermistor, stop, |celsius| {
        println!("Temperature {:?}", celsius)
    })?;
    if outcome == Outcome::Stopped {
        log::debug!("Thermometer interrupted");
    }
    Ok(())
}
