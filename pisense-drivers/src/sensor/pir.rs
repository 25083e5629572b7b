//! PIR motion sensor
//!
//! HC-SR501 style modules drive their output line high while they see
//! motion. Waits poll the line at a fixed sample interval, which also
//! rides out the short glitches these modules produce on retrigger.

use core::time::Duration;

use embedded_hal::delay::DelayNs;
use pisense_core::traits::{MotionSensor, SensorError};
use pisense_hal::InputPin;

/// PIR sensor on a GPIO input
pub struct PirSensor<P, D> {
    pin: P,
    delay: D,
    /// If false, motion = pin LOW
    active_high: bool,
    sample_interval: Duration,
}

impl<P: InputPin, D: DelayNs> PirSensor<P, D> {
    /// Create a new PIR sensor
    ///
    /// # Arguments
    /// - `pin`: The input line the sensor output is wired to
    /// - `delay`: Used to wait between samples
    /// - `active_high`: If true, motion is reported as a high level
    /// - `sample_interval`: Time between samples while waiting
    pub fn new(pin: P, delay: D, active_high: bool, sample_interval: Duration) -> Self {
        Self {
            pin,
            delay,
            active_high,
            sample_interval,
        }
    }
}

impl<P: InputPin, D: DelayNs> MotionSensor for PirSensor<P, D> {
    fn is_active(&mut self) -> Result<bool, SensorError> {
        let high = self.pin.is_high().map_err(|e| {
            log::warn!("PIR input read failed: {:?}", e);
            SensorError::Pin
        })?;
        Ok(high == self.active_high)
    }

    fn wait_for(&mut self, active: bool, timeout: Duration) -> Result<bool, SensorError> {
        let mut waited = Duration::ZERO;

        loop {
            if self.is_active()? == active {
                return Ok(true);
            }
            if waited >= timeout {
                return Ok(false);
            }

            let step = self.sample_interval.min(timeout - waited);
            // Sample intervals are short; saturate anything beyond u32 ns
            self.delay
                .delay_ns(u32::try_from(step.as_nanos()).unwrap_or(u32::MAX));
            waited += step;
        }
    }
}
