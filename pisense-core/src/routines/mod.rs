//! Device routines
//!
//! Each routine is one program's main loop, written against the device
//! traits. Routines never print; they hand events to a caller-supplied
//! closure and leave presentation to the binary.
//!
//! Long waits are cut into slices of [`STOP_CHECK_INTERVAL`] so a raised
//! stop flag (SIGINT) ends them within one slice.

pub mod banner;
pub mod blink;
pub mod bulb;
pub mod motion;
pub mod photometer;
pub mod thermometer;

use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;

use embedded_hal::delay::DelayNs;

pub use banner::{show_banner, Termination};
pub use blink::{run_blink, BlinkEvent};
pub use bulb::run_bulb_monitor;
pub use motion::{watch_motion, WatchError};
pub use photometer::{read_light_level, sample_light};
pub use thermometer::{read_temperature, run_thermometer, MeasureError};

/// Longest uninterrupted sleep inside a routine
pub const STOP_CHECK_INTERVAL: Duration = Duration::from_millis(100);

/// How a routine ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Ran to its natural end
    Finished,
    /// Ended early because the stop flag was raised
    Stopped,
}

/// Check the stop flag
pub fn stop_requested(stop: &AtomicBool) -> bool {
    stop.load(Ordering::Relaxed)
}

/// Sleep for `duration`, waking early if `stop` is raised
///
/// Returns `true` if the full duration elapsed without a stop request.
pub fn pause<D: DelayNs>(delay: &mut D, duration: Duration, stop: &AtomicBool) -> bool {
    let mut remaining = duration;

    while !remaining.is_zero() {
        if stop_requested(stop) {
            return false;
        }
        let step = remaining.min(STOP_CHECK_INTERVAL);
        // step <= 100 ms, well within u32 nanoseconds
        delay.delay_ns(step.as_nanos() as u32);
        remaining -= step;
    }

    !stop_requested(stop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeDelay;

    #[test]
    fn test_pause_runs_full_duration() {
        let mut delay = FakeDelay::new();
        let stop = AtomicBool::new(false);

        assert!(pause(&mut delay, Duration::from_millis(1250), &stop));
        assert_eq!(delay.elapsed(), Duration::from_millis(1250));
    }

    #[test]
    fn test_pause_returns_early_on_stop() {
        let mut delay = FakeDelay::new();
        let stop = AtomicBool::new(true);

        assert!(!pause(&mut delay, Duration::from_secs(10), &stop));
        assert_eq!(delay.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_pause_zero_is_immediate() {
        let mut delay = FakeDelay::new();
        let stop = AtomicBool::new(false);

        assert!(pause(&mut delay, Duration::ZERO, &stop));
        assert_eq!(delay.elapsed(), Duration::ZERO);
    }
}
