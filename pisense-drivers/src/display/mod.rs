//! Character display drivers

pub mod lcd;

pub use lcd::{I2cLcd, LcdGeometry};
