//! pisense Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by platform-specific HALs. The drivers in `pisense-drivers` are written
//! against these traits only, so they run unchanged on a Linux board and
//! against in-memory mocks in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (pisense-app)              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pisense-drivers (PCF8591, LCD, PIR)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pisense-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ pisense-hal-  │
//!             │    linux      │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`i2c::I2cBus`] - I2C bus operations

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use gpio::{GpioError, InputPin, OutputPin};
pub use i2c::{I2cBus, I2cBusError};
