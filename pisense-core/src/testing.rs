//! Mock devices and a fake clock shared by the unit tests

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use embedded_hal::delay::DelayNs;

use crate::layout::Align;
use crate::traits::{
    AnalogInput, DisplayError, Indicator, MotionSensor, OutputError, SensorError, TextDisplay,
};

/// Shared fake time in nanoseconds
pub type Clock = Rc<Cell<u64>>;

/// Delay that advances a fake clock instead of sleeping
pub struct FakeDelay {
    clock: Clock,
    stop_after: Option<(u64, Arc<AtomicBool>)>,
}

impl FakeDelay {
    pub fn new() -> Self {
        Self {
            clock: Rc::new(Cell::new(0)),
            stop_after: None,
        }
    }

    /// Raise `stop` once the fake clock reaches `limit`
    pub fn stopping_after(limit: Duration, stop: Arc<AtomicBool>) -> Self {
        Self {
            clock: Rc::new(Cell::new(0)),
            stop_after: Some((limit.as_nanos() as u64, stop)),
        }
    }

    pub fn clock(&self) -> Clock {
        self.clock.clone()
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.clock.get())
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        let now = self.clock.get() + u64::from(ns);
        self.clock.set(now);
        if let Some((limit, stop)) = &self.stop_after {
            if now >= *limit {
                stop.store(true, Ordering::Relaxed);
            }
        }
    }
}

/// Indicator recording every state change with its fake timestamp
pub struct MockIndicator {
    pub on: bool,
    pub history: Vec<(Duration, bool)>,
    clock: Option<Clock>,
    stuck_off: bool,
    broken: bool,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self {
            on: false,
            history: Vec::new(),
            clock: None,
            stuck_off: false,
            broken: false,
        }
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            clock: Some(clock),
            ..Self::new()
        }
    }

    /// Output that accepts writes but never turns on
    pub fn stuck_off() -> Self {
        Self {
            stuck_off: true,
            ..Self::new()
        }
    }

    /// Output whose writes fail
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::new()
        }
    }
}

impl Indicator for MockIndicator {
    fn set_on(&mut self, on: bool) -> Result<(), OutputError> {
        if self.broken {
            return Err(OutputError::Pin);
        }
        self.on = on && !self.stuck_off;
        let now = self
            .clock
            .as_ref()
            .map_or(Duration::ZERO, |c| Duration::from_nanos(c.get()));
        self.history.push((now, self.on));
        Ok(())
    }

    fn is_on(&self) -> Result<bool, OutputError> {
        Ok(self.on)
    }
}

/// Four-channel converter returning fixed samples
pub struct MockAdc {
    values: [u8; 4],
    failing: bool,
    pub reads: Vec<u8>,
}

impl MockAdc {
    pub fn new(values: [u8; 4]) -> Self {
        Self {
            values,
            failing: false,
            reads: Vec::new(),
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new([0; 4])
        }
    }
}

impl AnalogInput for MockAdc {
    fn read_channel(&mut self, channel: u8) -> Result<u8, SensorError> {
        if self.failing {
            return Err(SensorError::Bus);
        }
        let value = *self
            .values
            .get(usize::from(channel))
            .ok_or(SensorError::InvalidChannel(channel))?;
        self.reads.push(channel);
        Ok(value)
    }
}

/// Operations seen by [`MockDisplay`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOp {
    Text(String, u8),
    Clear,
    Backlight(bool),
}

/// Display recording every operation
pub struct MockDisplay {
    pub ops: Vec<DisplayOp>,
    failing_writes: bool,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            failing_writes: false,
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            failing_writes: true,
            ..Self::new()
        }
    }
}

impl TextDisplay for MockDisplay {
    fn write_text(&mut self, text: &str, row: u8, _align: Align) -> Result<(), DisplayError> {
        if self.failing_writes {
            return Err(DisplayError::Communication);
        }
        self.ops.push(DisplayOp::Text(text.into(), row));
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ops.push(DisplayOp::Clear);
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.ops.push(DisplayOp::Backlight(on));
        Ok(())
    }
}

/// Motion sensor replaying one level per 100 ms sample
pub struct ScriptedMotion {
    samples: VecDeque<bool>,
    stop_when_exhausted: Option<Arc<AtomicBool>>,
    failing: bool,
}

impl ScriptedMotion {
    const SAMPLE: Duration = Duration::from_millis(100);

    pub fn new(samples: &[bool]) -> Self {
        Self {
            samples: samples.iter().copied().collect(),
            stop_when_exhausted: None,
            failing: false,
        }
    }

    /// Raise `stop` once the script has been consumed
    pub fn stopping_when_exhausted(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop_when_exhausted = Some(stop);
        self
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new(&[])
        }
    }

    fn next_sample(&mut self) -> Option<bool> {
        let sample = self.samples.pop_front();
        if sample.is_none() {
            match &self.stop_when_exhausted {
                Some(stop) => stop.store(true, Ordering::Relaxed),
                None => panic!("motion script exhausted"),
            }
        }
        sample
    }
}

impl MotionSensor for ScriptedMotion {
    fn is_active(&mut self) -> Result<bool, SensorError> {
        if self.failing {
            return Err(SensorError::Pin);
        }
        Ok(self.samples.front().copied().unwrap_or(false))
    }

    fn wait_for(&mut self, active: bool, timeout: Duration) -> Result<bool, SensorError> {
        if self.failing {
            return Err(SensorError::Pin);
        }

        let mut waited = Duration::ZERO;
        loop {
            match self.next_sample() {
                Some(level) if level == active => return Ok(true),
                Some(_) => {}
                None => return Ok(false),
            }
            waited += Self::SAMPLE;
            if waited >= timeout {
                return Ok(false);
            }
        }
    }
}
