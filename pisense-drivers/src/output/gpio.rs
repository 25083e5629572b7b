//! GPIO binary output
//!
//! Drives an LED or a lamp optocoupler from a GPIO line, directly or via
//! a transistor.

use pisense_core::traits::{Indicator, OutputError};
use pisense_hal::OutputPin;

/// GPIO indicator output
///
/// The pin can be configured as active-high (default) or active-low.
/// [`Indicator::is_on`] reads the line back, so a pin that did not accept
/// the write reports its real level.
pub struct GpioIndicator<P> {
    pin: P,
    /// If true, output ON = pin LOW
    inverted: bool,
}

impl<P: OutputPin> GpioIndicator<P> {
    /// Create a new GPIO output and switch it off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the output is ON when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Result<Self, OutputError> {
        let mut output = Self { pin, inverted };
        output.set_on(false)?;
        Ok(output)
    }

    /// Create a new GPIO output with active-high drive
    pub fn new_active_high(pin: P) -> Result<Self, OutputError> {
        Self::new(pin, false)
    }

    /// Create a new GPIO output with active-low drive
    pub fn new_active_low(pin: P) -> Result<Self, OutputError> {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> Indicator for GpioIndicator<P> {
    fn set_on(&mut self, on: bool) -> Result<(), OutputError> {
        // Normal: on=true, inverted=false → high
        // Inverted: on=true, inverted=true → low
        self.pin.set_state(on != self.inverted).map_err(|e| {
            log::warn!("GPIO output write failed: {:?}", e);
            OutputError::Pin
        })
    }

    fn is_on(&self) -> Result<bool, OutputError> {
        let high = self.pin.is_set_high().map_err(|e| {
            log::warn!("GPIO output read back failed: {:?}", e);
            OutputError::Pin
        })?;
        Ok(high != self.inverted)
    }
}
