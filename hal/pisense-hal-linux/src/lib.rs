//! Linux HAL for pisense
//!
//! This crate provides implementations of the pisense-hal traits for
//! Raspberry Pi class boards running Linux:
//! - I2C through the i2c-dev character device (`/dev/i2c-N`)
//! - GPIO lines through the GPIO character device (`/dev/gpiochipN`)
//! - Blocking delays from the host clock
//!
//! Device nodes are opened here and only here; everything above this
//! crate works with the HAL traits.

#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

pub use gpio::{GpioChip, LineInput, LineOutput};
pub use i2c::{HalI2c, LinuxI2c};

/// Blocking delay backed by `std::thread::sleep`
pub use linux_embedded_hal::Delay;
