//! Photoresistor read

use core::sync::atomic::AtomicBool;

use super::stop_requested;
use crate::light::LightLevel;
use crate::traits::{AnalogInput, SensorError};

/// Read the light level from `channel`
///
/// The raw sample is the light level; nothing is scaled or inverted.
pub fn read_light_level<A: AnalogInput>(adc: &mut A, channel: u8) -> Result<LightLevel, SensorError> {
    let sample = adc.read_channel(channel)?;
    log::debug!("Photoresistor sample {}", sample);
    Ok(LightLevel(sample))
}

/// Read the light level unless a stop was requested around the read
///
/// Returns `None` when `stop` is raised before or during the transaction,
/// so an interrupted program reports nothing.
pub fn sample_light<A: AnalogInput>(
    adc: &mut A,
    channel: u8,
    stop: &AtomicBool,
) -> Result<Option<LightLevel>, SensorError> {
    if stop_requested(stop) {
        return Ok(None);
    }
    let light = read_light_level(adc, channel)?;
    Ok((!stop_requested(stop)).then_some(light))
}
