//! Application errors
//!
//! Every failure a program can end with, converted from the layer error
//! that caused it. `main` logs it and exits with a failure status.

use std::fmt;
use std::io;
use std::path::PathBuf;

use pisense_core::config::ConfigError;
use pisense_core::routines::{MeasureError, WatchError};
use pisense_core::traits::{DisplayError, OutputError, SensorError};
use pisense_hal::{GpioError, I2cBusError};

#[derive(Debug)]
pub enum AppError {
    /// Configuration file could not be read
    ConfigRead { path: PathBuf, source: io::Error },
    /// Configuration file is not valid TOML for the expected layout
    ConfigParse(toml::de::Error),
    /// Configuration values out of range
    Config(ConfigError),
    /// I2C bus could not be opened
    Bus(I2cBusError),
    /// GPIO chip or line could not be requested
    Gpio(GpioError),
    Sensor(SensorError),
    Measure(MeasureError),
    Watch(WatchError),
    Display(DisplayError),
    Output(OutputError),
    /// Signal handlers could not be installed
    Signal(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigRead { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            AppError::ConfigParse(e) => write!(f, "invalid configuration: {}", e),
            AppError::Config(e) => write!(f, "invalid configuration: {}", e),
            AppError::Bus(e) => write!(f, "I2C bus unavailable: {:?}", e),
            AppError::Gpio(e) => write!(f, "GPIO unavailable: {:?}", e),
            AppError::Sensor(e) => e.fmt(f),
            AppError::Measure(e) => e.fmt(f),
            AppError::Watch(e) => e.fmt(f),
            AppError::Display(e) => e.fmt(f),
            AppError::Output(e) => e.fmt(f),
            AppError::Signal(e) => write!(f, "cannot install signal handlers: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::ConfigRead { source, .. } => Some(source),
            AppError::ConfigParse(e) => Some(e),
            AppError::Signal(e) => Some(e),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::ConfigParse(e)
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<I2cBusError> for AppError {
    fn from(e: I2cBusError) -> Self {
        AppError::Bus(e)
    }
}

impl From<GpioError> for AppError {
    fn from(e: GpioError) -> Self {
        AppError::Gpio(e)
    }
}

impl From<SensorError> for AppError {
    fn from(e: SensorError) -> Self {
        AppError::Sensor(e)
    }
}

impl From<MeasureError> for AppError {
    fn from(e: MeasureError) -> Self {
        AppError::Measure(e)
    }
}

impl From<WatchError> for AppError {
    fn from(e: WatchError) -> Self {
        AppError::Watch(e)
    }
}

impl From<DisplayError> for AppError {
    fn from(e: DisplayError) -> Self {
        AppError::Display(e)
    }
}

impl From<OutputError> for AppError {
    fn from(e: OutputError) -> Self {
        AppError::Output(e)
    }
}
