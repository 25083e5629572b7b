//! Photoresistor light level
//!
//! The light level is the raw ADC sample, unchanged. Whether a larger value
//! means more or less light depends on the divider wiring; on the deployed
//! board the photoresistor is on the supply side, so larger means darker.

use core::fmt;

/// Raw light level as read from the ADC (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LightLevel(pub u8);

impl LightLevel {
    /// Get the raw sample
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Classify the level
    pub fn status(self) -> LightStatus {
        LightStatus::classify(self)
    }
}

impl From<u8> for LightLevel {
    fn from(sample: u8) -> Self {
        Self(sample)
    }
}

impl fmt::Display for LightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Upper bound (inclusive) of the `Good` band
pub const GOOD_MAX: u8 = 187;
/// Upper bound (inclusive) of the `Medium` band
pub const MEDIUM_MAX: u8 = 200;
/// Upper bound (inclusive) of the `LightDark` band, and the level at which
/// the lamp controller considers the room dark
pub const LIGHT_DARK_MAX: u8 = 217;

/// Coarse room brightness derived from a light level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightStatus {
    /// Room is well lit
    Good,
    /// Room is dimming
    Medium,
    /// Room is getting dark
    LightDark,
    /// Room is dark
    Dark,
}

impl LightStatus {
    /// Classify a light level into a status band
    pub fn classify(level: LightLevel) -> Self {
        match level.0 {
            0..=GOOD_MAX => LightStatus::Good,
            0..=MEDIUM_MAX => LightStatus::Medium,
            0..=LIGHT_DARK_MAX => LightStatus::LightDark,
            _ => LightStatus::Dark,
        }
    }

    /// Human readable name
    pub const fn name(self) -> &'static str {
        match self {
            LightStatus::Good => "Good",
            LightStatus::Medium => "Medium",
            LightStatus::LightDark => "LightDark",
            LightStatus::Dark => "Dark",
        }
    }
}

impl fmt::Display for LightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
