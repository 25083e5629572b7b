//! Lamp control decision
//!
//! Decides whether the lamp behind the optocoupler should be on, from the
//! room light level and the local hour. Evenings switch the lamp on, the
//! small hours switch it off, and in between the light level decides.
//!
//! Once the lamp is on, the sensor sees a lit room, so switching off during
//! the evening window is left to the clock alone.

use core::fmt;
use core::ops::RangeInclusive;

use crate::light::{LightLevel, LIGHT_DARK_MAX};
use crate::traits::{Indicator, OutputError};

/// Evening window (local hours) in which the lamp is switched on
pub const EVENING_HOURS: RangeInclusive<u8> = 17..=23;

/// Night window (local hours) in which the lamp is switched off
pub const NIGHT_HOURS: RangeInclusive<u8> = 0..=6;

/// Lamp state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BulbState {
    On,
    #[default]
    Off,
}

impl BulbState {
    pub const fn is_on(self) -> bool {
        matches!(self, BulbState::On)
    }

    pub const fn from_on(on: bool) -> Self {
        if on {
            BulbState::On
        } else {
            BulbState::Off
        }
    }
}

impl fmt::Display for BulbState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BulbState::On => "on",
            BulbState::Off => "off",
        })
    }
}

/// How the lamp state is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BulbMode {
    /// Decided from light level and time of day
    #[default]
    Sensor,
    /// The requested state is applied as is
    Manual,
}

/// Decide the next lamp state in sensor mode
///
/// `light` is `None` when no reading is available, in which case only the
/// clock can switch the lamp.
pub fn decide(current: BulbState, light: Option<LightLevel>, hour: u8) -> BulbState {
    let evening = EVENING_HOURS.contains(&hour);
    let night = NIGHT_HOURS.contains(&hour);
    let dark = light.map(|l| l.raw() >= LIGHT_DARK_MAX);

    match current {
        BulbState::Off if evening || (dark == Some(true) && !night) => BulbState::On,
        BulbState::On if night || (dark == Some(false) && !evening) => BulbState::Off,
        unchanged => unchanged,
    }
}

/// Lamp controller owning the decision state
///
/// The stored state is always the state read back from the output after
/// driving it, not the requested one.
#[derive(Debug, Clone)]
pub struct BulbController {
    mode: BulbMode,
    requested: BulbState,
    state: BulbState,
}

impl BulbController {
    /// Create a controller
    ///
    /// `requested` is only used in manual mode.
    pub fn new(mode: BulbMode, requested: BulbState) -> Self {
        Self {
            mode,
            requested,
            state: BulbState::Off,
        }
    }

    pub fn state(&self) -> BulbState {
        self.state
    }

    /// Run one control step and drive the output
    ///
    /// Returns the state read back from the output.
    pub fn update<O: Indicator>(
        &mut self,
        light: Option<LightLevel>,
        hour: u8,
        output: &mut O,
    ) -> Result<BulbState, OutputError> {
        let target = match self.mode {
            BulbMode::Sensor => decide(self.state, light, hour),
            BulbMode::Manual => self.requested,
        };

        if target != self.state {
            log::info!(
                "Switching bulb {} (mode={:?}, light={:?}, hour={})",
                target,
                self.mode,
                light.map(LightLevel::raw),
                hour
            );
        }

        output.set_on(target.is_on())?;

        let actual = BulbState::from_on(output.is_on()?);
        if actual != target {
            log::warn!("Bulb output reads {} after requesting {}", actual, target);
        }

        self.state = actual;
        Ok(actual)
    }
}
