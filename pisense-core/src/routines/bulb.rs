//! Lamp monitor loop

use core::sync::atomic::AtomicBool;
use core::time::Duration;

use embedded_hal::delay::DelayNs;

use super::{pause, read_light_level, stop_requested, Outcome};
use crate::bulb::{BulbController, BulbState};
use crate::light::LightLevel;
use crate::traits::{AnalogInput, Indicator, OutputError};

/// Run a control step now and then every `interval` until stopped
///
/// `hour` supplies the local hour (0-23) for each step. A failed light
/// reading skips that step; a failed output ends the loop.
#[allow(clippy::too_many_arguments)]
pub fn run_bulb_monitor<A, O, D, H, F>(
    adc: &mut A,
    channel: u8,
    output: &mut O,
    controller: &mut BulbController,
    delay: &mut D,
    interval: Duration,
    stop: &AtomicBool,
    mut hour: H,
    mut report: F,
) -> Result<Outcome, OutputError>
where
    A: AnalogInput,
    O: Indicator,
    D: DelayNs,
    H: FnMut() -> u8,
    F: FnMut(LightLevel, BulbState),
{
    loop {
        if stop_requested(stop) {
            return Ok(Outcome::Stopped);
        }

        match read_light_level(adc, channel) {
            Ok(light) => {
                let state = controller.update(Some(light), hour(), output)?;
                report(light, state);
            }
            Err(e) => log::warn!("Skipping bulb update, light level unavailable: {}", e),
        }

        if !pause(delay, interval, stop) {
            return Ok(Outcome::Stopped);
        }
    }
}
