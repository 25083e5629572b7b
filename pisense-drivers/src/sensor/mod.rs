//! Sensor drivers

pub mod pir;

pub use pir::PirSensor;
