//! I2C bus abstractions
//!
//! Provides traits for I2C master operations that can be implemented
//! by platform-specific HALs.

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum I2cBusError {
    /// Bus error (misplaced start/stop condition)
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// NACK received (no device at the address, or device busy)
    Nack,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices.
pub trait I2cBus {
    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), I2cBusError>;

    /// Write then read in a single transaction (repeated start)
    ///
    /// This is commonly used to write a control byte then read data.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `write_data` - Bytes to write (typically a register or control byte)
    /// * `read_buf` - Buffer to read into
    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError>;
}
