//! NTC thermistor conversion
//!
//! Converts an 8-bit ADC sample taken across a voltage divider into a
//! temperature using the simplified Beta equation:
//!
//! ```text
//! 1/T = 1/T0 + ln(R/R0) / B
//! ```
//!
//! Circuit: VREF -- R_series -- ADC_PIN -- NTC -- GND
//! Vr = VREF * R_t / (R_series + R_t), inverted below to recover R_t.

/// Offset between Kelvin and Celsius
pub const KELVIN_OFFSET: f64 = 273.15;

/// Errors from the conversion arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// The sample sits at the reference voltage (full scale) and the
    /// divider equation divides by zero
    DivisionByZero,
    /// The derived resistance is negative, which has no logarithm
    NonPositiveLogarithm,
}

impl core::fmt::Display for DomainError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DomainError::DivisionByZero => {
                f.write_str("sample at full scale, divider equation divides by zero")
            }
            DomainError::NonPositiveLogarithm => {
                f.write_str("negative thermistor resistance, logarithm undefined")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Electrical model of the thermistor and its divider
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThermistorModel {
    /// ADC reference voltage in volts
    pub vref: f64,
    /// Sample value that corresponds to `vref`
    pub full_scale: f64,
    /// Fixed divider resistor in ohms
    pub series_ohms: f64,
    /// Thermistor resistance at `nominal_celsius`
    pub nominal_ohms: f64,
    /// Reference temperature for `nominal_ohms`
    pub nominal_celsius: f64,
    /// Beta coefficient in Kelvin
    pub beta: f64,
}

impl Default for ThermistorModel {
    fn default() -> Self {
        Self::NTC_10K_3950
    }
}

impl ThermistorModel {
    /// 10K NTC, B = 3950, 10K series resistor, 5 V reference, 8-bit ADC
    pub const NTC_10K_3950: Self = Self {
        vref: 5.0,
        full_scale: 255.0,
        series_ohms: 10_000.0,
        nominal_ohms: 10_000.0,
        nominal_celsius: 25.0,
        beta: 3950.0,
    };

    /// Reconstruct the sensed voltage from a raw sample
    pub fn sample_to_voltage(&self, sample: u8) -> f64 {
        self.vref * f64::from(sample) / self.full_scale
    }

    /// Invert the divider equation
    ///
    /// `R_t = R_series * Vr / (VREF - Vr)`
    pub fn voltage_to_resistance(&self, voltage: f64) -> Result<f64, DomainError> {
        let headroom = self.vref - voltage;
        if headroom == 0.0 {
            return Err(DomainError::DivisionByZero);
        }
        Ok(self.series_ohms * voltage / headroom)
    }

    /// Apply the Beta equation to a thermistor resistance
    ///
    /// A resistance of exactly zero skips the logarithm and yields the
    /// reference temperature, which is what a shorted (or grounded) input
    /// reads as.
    pub fn resistance_to_celsius(&self, resistance: f64) -> Result<f64, DomainError> {
        if resistance < 0.0 {
            return Err(DomainError::NonPositiveLogarithm);
        }

        let exponent = if resistance == 0.0 {
            0.0
        } else {
            (resistance / self.nominal_ohms).ln() / self.beta
        };

        let kelvin = 1.0 / (exponent + 1.0 / (KELVIN_OFFSET + self.nominal_celsius));
        Ok(kelvin - KELVIN_OFFSET)
    }

    /// Convert a raw sample to degrees Celsius
    pub fn sample_to_celsius(&self, sample: u8) -> Result<f64, DomainError> {
        let voltage = self.sample_to_voltage(sample);
        let resistance = self.voltage_to_resistance(voltage)?;
        self.resistance_to_celsius(resistance)
    }
}

/// Convert a raw sample using the default 10K/3950 model
pub fn sample_to_celsius(sample: u8) -> Result<f64, DomainError> {
    ThermistorModel::NTC_10K_3950.sample_to_celsius(sample)
}
