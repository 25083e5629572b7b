//! LED blink loop

use core::sync::atomic::AtomicBool;

use embedded_hal::delay::DelayNs;

use super::{pause, stop_requested, Outcome};
use crate::config::BlinkConfig;
use crate::traits::{Indicator, OutputError};

/// Progress reported by [`run_blink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkEvent {
    TurningOn,
    TurningOff,
}

/// Blink the LED `config.cycles` times
///
/// Each cycle reports, switches on, waits `on_ms`, reports, switches off
/// and waits `off_ms`. If stopped early the LED is left off.
pub fn run_blink<L, D, F>(
    led: &mut L,
    delay: &mut D,
    config: &BlinkConfig,
    stop: &AtomicBool,
    mut report: F,
) -> Result<Outcome, OutputError>
where
    L: Indicator,
    D: DelayNs,
    F: FnMut(BlinkEvent),
{
    for _ in 0..config.cycles {
        if stop_requested(stop) {
            return Ok(Outcome::Stopped);
        }

        report(BlinkEvent::TurningOn);
        led.set_on(true)?;
        if !pause(delay, config.on_time(), stop) {
            led.set_on(false)?;
            return Ok(Outcome::Stopped);
        }

        report(BlinkEvent::TurningOff);
        led.set_on(false)?;
        if !pause(delay, config.off_time(), stop) {
            return Ok(Outcome::Stopped);
        }
    }

    Ok(Outcome::Finished)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeDelay, MockIndicator};
    use core::sync::atomic::Ordering;
    use core::time::Duration;

    #[test]
    fn test_five_cycles_half_second_apart() {
        let mut delay = FakeDelay::new();
        let mut led = MockIndicator::with_clock(delay.clock());
        let stop = AtomicBool::new(false);
        let mut events = Vec::new();

        let outcome = run_blink(&mut led, &mut delay, &BlinkConfig::default(), &stop, |e| {
            events.push(e)
        });

        assert_eq!(outcome, Ok(Outcome::Finished));

        // 10 transitions: (high, low) x 5
        let states: Vec<bool> = led.history.iter().map(|(_, on)| *on).collect();
        assert_eq!(states, [true, false].repeat(5));

        // Each transition 500 ms after the previous one
        for pair in led.history.windows(2) {
            assert_eq!(pair[1].0 - pair[0].0, Duration::from_millis(500));
        }
        assert_eq!(delay.elapsed(), Duration::from_secs(5));

        assert_eq!(
            events,
            [BlinkEvent::TurningOn, BlinkEvent::TurningOff].repeat(5)
        );
        assert!(!led.on);
    }

    #[test]
    fn test_stop_leaves_led_off() {
        let mut delay = FakeDelay::new();
        let mut led = MockIndicator::new();
        let stop = AtomicBool::new(false);

        let outcome = run_blink(&mut led, &mut delay, &BlinkConfig::default(), &stop, |e| {
            if e == BlinkEvent::TurningOn {
                stop.store(true, Ordering::Relaxed);
            }
        });

        assert_eq!(outcome, Ok(Outcome::Stopped));
        assert_eq!(led.history.len(), 2);
        assert!(!led.on);
    }

    #[test]
    fn test_custom_pattern() {
        // Toggle every 250 ms for 5 s
        let config = BlinkConfig {
            cycles: 10,
            on_ms: 250,
            off_ms: 250,
            ..BlinkConfig::default()
        };
        let mut delay = FakeDelay::new();
        let mut led = MockIndicator::new();
        let stop = AtomicBool::new(false);

        let outcome = run_blink(&mut led, &mut delay, &config, &stop, |_| {});

        assert_eq!(outcome, Ok(Outcome::Finished));
        assert_eq!(led.history.len(), 20);
        assert_eq!(delay.elapsed(), Duration::from_secs(5));
    }

    #[test]
    fn test_output_error_propagates() {
        let mut delay = FakeDelay::new();
        let mut led = MockIndicator::broken();
        let stop = AtomicBool::new(false);

        let outcome = run_blink(&mut led, &mut delay, &BlinkConfig::default(), &stop, |_| {});
        assert_eq!(outcome, Err(OutputError::Pin));
    }
}
