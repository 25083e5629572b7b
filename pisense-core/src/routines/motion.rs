//! PIR motion watch loop

use core::fmt;
use core::sync::atomic::AtomicBool;
use core::time::Duration;

use super::{stop_requested, Outcome, STOP_CHECK_INTERVAL};
use crate::traits::{MotionSensor, SensorError};

/// Errors that end a motion watch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchError {
    /// Reading the sensor failed
    Sensor(SensorError),
    /// A wait exceeded the configured deadline
    Timeout,
}

impl From<SensorError> for WatchError {
    fn from(e: SensorError) -> Self {
        WatchError::Sensor(e)
    }
}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchError::Sensor(e) => write!(f, "motion sensor: {}", e),
            WatchError::Timeout => f.write_str("motion sensor did not change state in time"),
        }
    }
}

impl std::error::Error for WatchError {}

enum Wait {
    Reached,
    TimedOut,
    Stopped,
}

/// Wait for the sensor to reach `active`, observing `stop` and `timeout`
fn wait_until<S: MotionSensor>(
    sensor: &mut S,
    active: bool,
    timeout: Option<Duration>,
    stop: &AtomicBool,
) -> Result<Wait, SensorError> {
    let mut waited = Duration::ZERO;

    loop {
        if stop_requested(stop) {
            return Ok(Wait::Stopped);
        }

        let slice = match timeout {
            Some(limit) => limit.saturating_sub(waited).min(STOP_CHECK_INTERVAL),
            None => STOP_CHECK_INTERVAL,
        };

        if sensor.wait_for(active, slice)? {
            return Ok(Wait::Reached);
        }

        waited += slice;
        if timeout.is_some_and(|limit| waited >= limit) {
            return Ok(Wait::TimedOut);
        }
    }
}

/// Report every motion until stopped
///
/// Waits for motion, reports it with a running count, then waits for the
/// sensor to settle before re-arming. Each motion is reported exactly once
/// no matter how long the sensor stays active.
///
/// With `timeout` set, a single wait (for motion or for the sensor to
/// settle) that exceeds it ends the watch with [`WatchError::Timeout`].
pub fn watch_motion<S, F>(
    sensor: &mut S,
    timeout: Option<Duration>,
    stop: &AtomicBool,
    mut on_motion: F,
) -> Result<Outcome, WatchError>
where
    S: MotionSensor,
    F: FnMut(u64),
{
    let mut count = 0u64;

    loop {
        match wait_until(sensor, true, timeout, stop)? {
            Wait::Reached => {}
            Wait::Stopped => return Ok(Outcome::Stopped),
            Wait::TimedOut => return Err(WatchError::Timeout),
        }

        count += 1;
        log::debug!("Motion #{}", count);
        on_motion(count);

        match wait_until(sensor, false, timeout, stop)? {
            Wait::Reached => {}
            Wait::Stopped => return Ok(Outcome::Stopped),
            Wait::TimedOut => return Err(WatchError::Timeout),
        }
    }
}
