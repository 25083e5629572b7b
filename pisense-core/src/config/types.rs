//! Configuration type definitions

use core::fmt;
use core::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bulb::{BulbMode, BulbState};
use crate::layout::{Align, MAX_COLUMNS};
use crate::thermistor::ThermistorModel;

/// Channels on the PCF8591
pub const ADC_CHANNELS: u8 = 4;

/// Rows an HD44780 controller can address through the row table
pub const MAX_ROWS: u8 = 4;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// I2C address outside the 7-bit range
    InvalidAddress(u8),
    /// ADC channel does not exist
    InvalidChannel(u8),
    /// Display geometry not supported
    InvalidGeometry { columns: u8, rows: u8 },
    /// A period or interval of zero
    ZeroInterval(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAddress(addr) => {
                write!(f, "I2C address {:#04x} is not a 7-bit address", addr)
            }
            ConfigError::InvalidChannel(ch) => {
                write!(f, "ADC channel {} out of range 0..{}", ch, ADC_CHANNELS)
            }
            ConfigError::InvalidGeometry { columns, rows } => write!(
                f,
                "display geometry {}x{} unsupported (max {}x{})",
                columns, rows, MAX_COLUMNS, MAX_ROWS
            ),
            ConfigError::ZeroInterval(key) => write!(f, "{} must be greater than zero", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// I2C bus configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct I2cConfig {
    /// Bus device node
    pub device: String,
}

impl Default for I2cConfig {
    fn default() -> Self {
        // Bus 1 is the header bus on every Raspberry Pi since revision 2
        Self {
            device: "/dev/i2c-1".into(),
        }
    }
}

/// GPIO controller configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GpioConfig {
    /// GPIO character device (line numbers are BCM numbers on gpiochip0)
    pub chip: String,
    /// Consumer label shown by `gpioinfo`
    pub consumer: String,
}

impl Default for GpioConfig {
    fn default() -> Self {
        Self {
            chip: "/dev/gpiochip0".into(),
            consumer: "pisense".into(),
        }
    }
}

/// PCF8591 converter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdcConfig {
    /// 7-bit I2C address (0x48 with A0-A2 grounded)
    pub address: u8,
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self { address: 0x48 }
    }
}

/// Thermistor program configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThermistorConfig {
    /// ADC channel wired to the thermistor divider
    pub channel: u8,
    /// Interval between readings in milliseconds
    pub interval_ms: u64,
    /// Electrical model of the divider
    pub model: ThermistorModel,
}

impl Default for ThermistorConfig {
    fn default() -> Self {
        Self {
            channel: 1,
            interval_ms: 1000,
            model: ThermistorModel::default(),
        }
    }
}

impl ThermistorConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Photoresistor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhotoresistorConfig {
    /// ADC channel wired to the photoresistor divider
    pub channel: u8,
}

impl Default for PhotoresistorConfig {
    fn default() -> Self {
        Self { channel: 2 }
    }
}

/// LED blink configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BlinkConfig {
    /// GPIO line driving the LED
    pub pin: u32,
    /// Number of on/off cycles
    pub cycles: u32,
    /// Time the LED stays on per cycle, in milliseconds
    pub on_ms: u64,
    /// Time the LED stays off per cycle, in milliseconds
    pub off_ms: u64,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            pin: 26,
            cycles: 5,
            on_ms: 500,
            off_ms: 500,
        }
    }
}

impl BlinkConfig {
    pub fn on_time(&self) -> Duration {
        Duration::from_millis(self.on_ms)
    }

    pub fn off_time(&self) -> Duration {
        Duration::from_millis(self.off_ms)
    }
}

/// PIR motion sensor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionConfig {
    /// GPIO line the sensor output is wired to
    pub pin: u32,
    /// Sensor drives the line high on motion
    pub active_high: bool,
    /// How often the line level is sampled while waiting, in milliseconds
    pub sample_interval_ms: u64,
    /// Give up a single wait after this long (none = wait forever)
    pub wait_timeout_ms: Option<u64>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            pin: 4,
            active_high: true,
            sample_interval_ms: 100,
            wait_timeout_ms: None,
        }
    }
}

impl MotionConfig {
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    pub fn wait_timeout(&self) -> Option<Duration> {
        self.wait_timeout_ms.map(Duration::from_millis)
    }
}

/// Character LCD configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LcdConfig {
    /// 7-bit I2C address of the PCF8574 backpack
    pub address: u8,
    /// Characters per row
    pub columns: u8,
    /// Number of rows
    pub rows: u8,
    /// Backlight on
    pub backlight: bool,
    /// Text shown by the `lcd` program
    pub text: String,
    /// Row the text starts on (1-based)
    pub row: u8,
    /// Alignment of the text
    pub align: Align,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            address: 0x27,
            columns: 20,
            rows: 4,
            backlight: true,
            text: "Hello Raspberry Pi 3".into(),
            row: 1,
            align: Align::Left,
        }
    }
}

/// Lamp controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BulbConfig {
    /// GPIO line driving the optocoupler
    pub pin: u32,
    /// Time between control steps, in seconds
    pub interval_s: u64,
    /// Sensor-driven or manual
    pub mode: BulbMode,
    /// State applied in manual mode
    pub manual_state: BulbState,
}

impl Default for BulbConfig {
    fn default() -> Self {
        Self {
            pin: 16,
            interval_s: 5 * 60,
            mode: BulbMode::Sensor,
            manual_state: BulbState::Off,
        }
    }
}

impl BulbConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_s)
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SystemConfig {
    pub i2c: I2cConfig,
    pub gpio: GpioConfig,
    pub adc: AdcConfig,
    pub thermistor: ThermistorConfig,
    pub photoresistor: PhotoresistorConfig,
    pub blink: BlinkConfig,
    pub motion: MotionConfig,
    pub lcd: LcdConfig,
    pub bulb: BulbConfig,
}

impl SystemConfig {
    /// Check values that the types alone cannot rule out
    pub fn validate(&self) -> Result<(), ConfigError> {
        for address in [self.adc.address, self.lcd.address] {
            if address > 0x7F {
                return Err(ConfigError::InvalidAddress(address));
            }
        }

        for channel in [self.thermistor.channel, self.photoresistor.channel] {
            if channel >= ADC_CHANNELS {
                return Err(ConfigError::InvalidChannel(channel));
            }
        }

        let lcd = &self.lcd;
        if lcd.columns == 0
            || usize::from(lcd.columns) > MAX_COLUMNS
            || lcd.rows == 0
            || lcd.rows > MAX_ROWS
        {
            return Err(ConfigError::InvalidGeometry {
                columns: lcd.columns,
                rows: lcd.rows,
            });
        }

        if self.thermistor.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("thermistor.interval_ms"));
        }
        if self.motion.sample_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("motion.sample_interval_ms"));
        }
        if self.bulb.interval_s == 0 {
            return Err(ConfigError::ZeroInterval("bulb.interval_s"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_deployed_board() {
        let config = SystemConfig::default();
        assert_eq!(config.adc.address, 0x48);
        assert_eq!(config.thermistor.channel, 1);
        assert_eq!(config.photoresistor.channel, 2);
        assert_eq!(config.blink.pin, 26);
        assert_eq!(config.motion.pin, 4);
        assert_eq!(config.lcd.address, 0x27);
        assert_eq!(config.bulb.pin, 16);
        assert_eq!(config.bulb.interval(), Duration::from_secs(300));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_channel() {
        let mut config = SystemConfig::default();
        config.photoresistor.channel = 4;
        assert_eq!(config.validate(), Err(ConfigError::InvalidChannel(4)));
    }

    #[test]
    fn test_rejects_bad_address() {
        let mut config = SystemConfig::default();
        config.lcd.address = 0x80;
        assert_eq!(config.validate(), Err(ConfigError::InvalidAddress(0x80)));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let mut config = SystemConfig::default();
        config.lcd.rows = 5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidGeometry { rows: 5, .. })
        ));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let mut config = SystemConfig::default();
        config.thermistor.interval_ms = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroInterval("thermistor.interval_ms"))
        );
    }
}
