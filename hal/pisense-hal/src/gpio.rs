//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by platform-specific HALs. Unlike on-chip registers, pins reached through
//! an operating system can fail, so every operation returns a `Result`.

/// Errors reported by GPIO implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// The line could not be requested (busy or does not exist)
    Unavailable,
    /// Reading or writing the line value failed
    Io,
}

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self) -> Result<(), GpioError>;

    /// Set the pin low (logic 0)
    fn set_low(&mut self) -> Result<(), GpioError>;

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) -> Result<(), GpioError> {
        if high {
            self.set_high()
        } else {
            self.set_low()
        }
    }

    /// Toggle the pin state
    fn toggle(&mut self) -> Result<(), GpioError> {
        let high = self.is_set_high()?;
        self.set_state(!high)
    }

    /// Check if the pin is currently driven high
    ///
    /// Implementations read the line back rather than returning a cached
    /// value, so the answer reflects what the hardware accepted.
    fn is_set_high(&self) -> Result<bool, GpioError>;

    /// Check if the pin is currently driven low
    fn is_set_low(&self) -> Result<bool, GpioError> {
        self.is_set_high().map(|high| !high)
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> Result<bool, GpioError>;
}
