//! Device traits
//!
//! These traits define the interface between the routines and the
//! device drivers. Drivers in `pisense-drivers` implement them on top of
//! the HAL traits; tests implement them with in-memory mocks.

pub mod analog;
pub mod display;
pub mod motion;
pub mod output;

pub use analog::{AnalogInput, SensorError};
pub use display::{DisplayError, TextDisplay};
pub use motion::MotionSensor;
pub use output::{Indicator, OutputError};
