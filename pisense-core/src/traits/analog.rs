//! Analog input and sensor errors

use core::fmt;

/// Errors that can occur while reading a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Bus transaction failed (no ACK, arbitration lost, ...)
    Bus,
    /// Channel does not exist on this converter
    InvalidChannel(u8),
    /// Reading the input pin failed
    Pin,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Bus => f.write_str("sensor bus transaction failed"),
            SensorError::InvalidChannel(ch) => write!(f, "no analog channel {}", ch),
            SensorError::Pin => f.write_str("reading the sensor pin failed"),
        }
    }
}

impl std::error::Error for SensorError {}

/// Multi-channel analog-to-digital converter
///
/// Takes `&mut self` because a conversion is a bus transaction.
pub trait AnalogInput {
    /// Read one 8-bit sample from `channel`
    fn read_channel(&mut self, channel: u8) -> Result<u8, SensorError>;
}
