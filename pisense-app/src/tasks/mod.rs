//! Programs
//!
//! Each program opens its hardware, runs one routine from pisense-core
//! and prints its results to stdout.

pub mod blink;
pub mod bulb;
pub mod lcd;
pub mod motion;
pub mod photoresistor;
pub mod thermistor;

pub use blink::blink_task;
pub use bulb::bulb_task;
pub use lcd::lcd_task;
pub use motion::motion_task;
pub use photoresistor::photoresistor_task;
pub use thermistor::thermistor_task;
