//! Board-agnostic core logic for pisense
//!
//! This crate contains all logic that does not depend on a specific
//! hardware implementation:
//!
//! - Device traits (analog input, text display, motion sensor, indicator)
//! - Thermistor conversion (Beta equation)
//! - Light level classification and the lamp decision table
//! - Routines driving the devices (blink, motion watch, thermometer, ...)
//! - Configuration type definitions
//!
//! Routines receive their hardware as explicitly passed handles and an
//! [`embedded_hal::delay::DelayNs`] for time, which is what lets the tests
//! drive them with mocks and a fake clock.

#![deny(unsafe_code)]

pub mod bulb;
pub mod config;
pub mod layout;
pub mod light;
pub mod routines;
pub mod thermistor;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;
