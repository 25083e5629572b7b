//! On/off output trait (LED, optocoupler)

use core::fmt;

/// Errors that can occur driving an output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputError {
    /// Writing or reading back the pin failed
    Pin,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Pin => f.write_str("driving the output pin failed"),
        }
    }
}

impl std::error::Error for OutputError {}

/// Binary output such as an LED or a lamp optocoupler
pub trait Indicator {
    /// Switch the output on or off
    fn set_on(&mut self, on: bool) -> Result<(), OutputError>;

    /// Check whether the output is on, as read back from the hardware
    fn is_on(&self) -> Result<bool, OutputError>;
}
