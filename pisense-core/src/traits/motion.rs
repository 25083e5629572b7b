//! Motion sensor trait

use core::time::Duration;

use super::SensorError;

/// Binary motion sensor (PIR)
pub trait MotionSensor {
    /// Check whether the sensor currently reports motion
    fn is_active(&mut self) -> Result<bool, SensorError>;

    /// Block until the sensor reports `active`, for at most `timeout`
    ///
    /// Returns `Ok(true)` when the state was reached and `Ok(false)` when
    /// the timeout elapsed first. Returns immediately if the sensor is
    /// already in the requested state.
    fn wait_for(&mut self, active: bool, timeout: Duration) -> Result<bool, SensorError>;
}
