//! Binary output drivers

pub mod gpio;

pub use gpio::GpioIndicator;
