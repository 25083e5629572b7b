//! Thermistor reading loop

use core::fmt;
use core::sync::atomic::AtomicBool;

use embedded_hal::delay::DelayNs;

use super::{pause, stop_requested, Outcome};
use crate::config::ThermistorConfig;
use crate::thermistor::{DomainError, ThermistorModel};
use crate::traits::{AnalogInput, SensorError};

/// Errors from taking a temperature reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureError {
    /// Reading the converter failed
    Sensor(SensorError),
    /// The sample has no temperature under the model
    Domain(DomainError),
}

impl From<SensorError> for MeasureError {
    fn from(e: SensorError) -> Self {
        MeasureError::Sensor(e)
    }
}

impl From<DomainError> for MeasureError {
    fn from(e: DomainError) -> Self {
        MeasureError::Domain(e)
    }
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureError::Sensor(e) => write!(f, "thermistor read: {}", e),
            MeasureError::Domain(e) => write!(f, "thermistor conversion: {}", e),
        }
    }
}

impl std::error::Error for MeasureError {}

/// Read one sample and convert it to degrees Celsius
pub fn read_temperature<A: AnalogInput>(
    adc: &mut A,
    channel: u8,
    model: &ThermistorModel,
) -> Result<f64, MeasureError> {
    let sample = adc.read_channel(channel)?;
    let celsius = model.sample_to_celsius(sample)?;
    log::debug!("Thermistor sample {} -> {:.2}°C", sample, celsius);
    Ok(celsius)
}

/// Report a temperature every `config.interval_ms` until stopped
///
/// Conversion errors end the loop; they are not retried.
pub fn run_thermometer<A, D, F>(
    adc: &mut A,
    delay: &mut D,
    config: &ThermistorConfig,
    stop: &AtomicBool,
    mut report: F,
) -> Result<Outcome, MeasureError>
where
    A: AnalogInput,
    D: DelayNs,
    F: FnMut(f64),
{
    loop {
        if stop_requested(stop) {
            return Ok(Outcome::Stopped);
        }

        let celsius = read_temperature(adc, config.channel, &config.model)?;
        report(celsius);

        if !pause(delay, config.interval(), stop) {
            return Ok(Outcome::Stopped);
        }
    }
}
