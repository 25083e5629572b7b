//! PCF8591 8-bit A/D converter
//!
//! Four single-ended inputs, one 8-bit sample per transaction. The chip
//! starts a conversion on the read that follows the control byte and
//! returns the result of the previous conversion first, so every read
//! fetches two bytes and keeps the second.

use pisense_core::traits::{AnalogInput, SensorError};
use pisense_hal::I2cBus;

/// Control byte bit enabling the analog output (keeps the oscillator running)
const ANALOG_OUTPUT_ENABLE: u8 = 0x40;

/// Number of single-ended inputs
pub const CHANNELS: u8 = 4;

/// PCF8591 on an I2C bus
pub struct Pcf8591<B> {
    bus: B,
    address: u8,
}

impl<B: I2cBus> Pcf8591<B> {
    /// Create a driver for the converter at `address` (0x48 with A0-A2 low)
    pub fn new(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// Release the bus
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: I2cBus> AnalogInput for Pcf8591<B> {
    fn read_channel(&mut self, channel: u8) -> Result<u8, SensorError> {
        if channel >= CHANNELS {
            return Err(SensorError::InvalidChannel(channel));
        }

        let mut buf = [0u8; 2];
        self.bus
            .write_read(self.address, &[ANALOG_OUTPUT_ENABLE | channel], &mut buf)
            .map_err(|e| {
                log::warn!(
                    "PCF8591 at {:#04x}: channel {} read failed: {:?}",
                    self.address,
                    channel,
                    e
                );
                SensorError::Bus
            })?;

        Ok(buf[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pisense_hal::I2cBusError;

    /// Bus answering with the stale byte followed by a per-channel sample
    struct MockBus {
        samples: [u8; 4],
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl MockBus {
        fn new(samples: [u8; 4]) -> Self {
            Self {
                samples,
                writes: Vec::new(),
                fail: false,
            }
        }
    }

    impl I2cBus for MockBus {
        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), I2cBusError> {
            self.writes.push((address, data.to_vec()));
            Ok(())
        }

        fn read(&mut self, _address: u8, _buf: &mut [u8]) -> Result<(), I2cBusError> {
            Ok(())
        }

        fn write_read(
            &mut self,
            address: u8,
            write_data: &[u8],
            read_buf: &mut [u8],
        ) -> Result<(), I2cBusError> {
            if self.fail {
                return Err(I2cBusError::Nack);
            }
            self.writes.push((address, write_data.to_vec()));
            let channel = usize::from(write_data[0] & 0x03);
            read_buf[0] = 0xEE;
            read_buf[1] = self.samples[channel];
            Ok(())
        }
    }

    #[test]
    fn test_reads_second_byte_of_selected_channel() {
        let mut adc = Pcf8591::new(MockBus::new([10, 20, 30, 40]), 0x48);

        assert_eq!(adc.read_channel(1), Ok(20));
        assert_eq!(adc.read_channel(2), Ok(30));

        let bus = adc.release();
        assert_eq!(bus.writes, vec![(0x48, vec![0x41]), (0x48, vec![0x42])]);
    }

    #[test]
    fn test_rejects_missing_channel() {
        let mut adc = Pcf8591::new(MockBus::new([0; 4]), 0x48);

        assert_eq!(adc.read_channel(4), Err(SensorError::InvalidChannel(4)));
        assert!(adc.release().writes.is_empty());
    }

    #[test]
    fn test_bus_failure_maps_to_sensor_error() {
        let mut bus = MockBus::new([0; 4]);
        bus.fail = true;
        let mut adc = Pcf8591::new(bus, 0x48);

        assert_eq!(adc.read_channel(0), Err(SensorError::Bus));
    }
}
