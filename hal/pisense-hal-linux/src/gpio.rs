//! GPIO lines over the GPIO character device
//!
//! Lines are addressed by their offset on the chip, which on
//! `/dev/gpiochip0` of a Raspberry Pi is the BCM number. A requested line
//! stays reserved for this process until its handle is dropped.

use gpio_cdev::{Chip, LineHandle, LineRequestFlags};
use pisense_hal::{GpioError, InputPin, OutputPin};

/// GPIO controller
pub struct GpioChip {
    chip: Chip,
    consumer: String,
}

impl GpioChip {
    /// Open a GPIO character device such as `/dev/gpiochip0`
    ///
    /// `consumer` labels the requested lines in `gpioinfo`.
    pub fn open(device: &str, consumer: &str) -> Result<Self, GpioError> {
        let chip = Chip::new(device).map_err(|e| {
            log::warn!("Cannot open GPIO chip {}: {}", device, e);
            GpioError::Unavailable
        })?;
        log::debug!("Opened GPIO chip {} ({} lines)", device, chip.num_lines());
        Ok(Self {
            chip,
            consumer: consumer.into(),
        })
    }

    /// Request `line` as an output, driven to `initial_high`
    pub fn output(&mut self, line: u32, initial_high: bool) -> Result<LineOutput, GpioError> {
        let handle = self.request(line, LineRequestFlags::OUTPUT, u8::from(initial_high))?;
        Ok(LineOutput { handle, line })
    }

    /// Request `line` as an input
    pub fn input(&mut self, line: u32) -> Result<LineInput, GpioError> {
        let handle = self.request(line, LineRequestFlags::INPUT, 0)?;
        Ok(LineInput { handle, line })
    }

    fn request(
        &mut self,
        line: u32,
        flags: LineRequestFlags,
        default: u8,
    ) -> Result<LineHandle, GpioError> {
        self.chip
            .get_line(line)
            .and_then(|l| l.request(flags, default, &self.consumer))
            .map_err(|e| {
                log::warn!("Cannot request GPIO line {}: {}", line, e);
                GpioError::Unavailable
            })
    }
}

/// Requested output line
pub struct LineOutput {
    handle: LineHandle,
    line: u32,
}

impl OutputPin for LineOutput {
    fn set_high(&mut self) -> Result<(), GpioError> {
        self.set_state(true)
    }

    fn set_low(&mut self) -> Result<(), GpioError> {
        self.set_state(false)
    }

    fn set_state(&mut self, high: bool) -> Result<(), GpioError> {
        self.handle.set_value(u8::from(high)).map_err(|e| {
            log::warn!("GPIO line {} write failed: {}", self.line, e);
            GpioError::Io
        })
    }

    fn is_set_high(&self) -> Result<bool, GpioError> {
        read_level(&self.handle, self.line)
    }
}

/// Requested input line
pub struct LineInput {
    handle: LineHandle,
    line: u32,
}

impl InputPin for LineInput {
    fn is_high(&self) -> Result<bool, GpioError> {
        read_level(&self.handle, self.line)
    }
}

fn read_level(handle: &LineHandle, line: u32) -> Result<bool, GpioError> {
    handle.get_value().map(|v| v != 0).map_err(|e| {
        log::warn!("GPIO line {} read failed: {}", line, e);
        GpioError::Io
    })
}
