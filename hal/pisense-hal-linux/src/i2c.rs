//! I2C bus over i2c-dev
//!
//! Any `embedded_hal::i2c::I2c` implementation can sit behind the
//! pisense [`I2cBus`] trait through [`HalI2c`]; on the board that is
//! `linux_embedded_hal::I2cdev`.

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use linux_embedded_hal::I2cdev;
use pisense_hal::{I2cBus, I2cBusError};

/// Map an embedded-hal error kind onto the pisense bus error
pub fn map_error_kind(kind: ErrorKind) -> I2cBusError {
    match kind {
        ErrorKind::Bus => I2cBusError::Bus,
        ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
        ErrorKind::NoAcknowledge(_) => I2cBusError::Nack,
        ErrorKind::Overrun => I2cBusError::Overrun,
        _ => I2cBusError::Other,
    }
}

/// Adapter from an embedded-hal I2C master to [`I2cBus`]
pub struct HalI2c<I> {
    inner: I,
}

impl<I: I2c> HalI2c<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

/// I2C bus on a Linux i2c-dev node
pub type LinuxI2c = HalI2c<I2cdev>;

impl LinuxI2c {
    /// Open a bus device node such as `/dev/i2c-1`
    pub fn open(device: &str) -> Result<Self, I2cBusError> {
        let dev = I2cdev::new(device).map_err(|e| {
            log::warn!("Cannot open I2C bus {}: {}", device, e);
            I2cBusError::Other
        })?;
        log::debug!("Opened I2C bus {}", device);
        Ok(Self::new(dev))
    }
}

impl<I: I2c> I2cBus for HalI2c<I> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
        self.inner
            .write(address, data)
            .map_err(|e| map_error_kind(e.kind()))
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), I2cBusError> {
        self.inner
            .read(address, buf)
            .map_err(|e| map_error_kind(e.kind()))
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), I2cBusError> {
        self.inner
            .write_read(address, write_data, read_buf)
            .map_err(|e| map_error_kind(e.kind()))
    }
}
