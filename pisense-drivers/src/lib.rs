//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in pisense-core, written against the pisense-hal bus and pin traits:
//!
//! - Analog input (PCF8591 8-bit ADC)
//! - Character display (HD44780 behind a PCF8574 I2C backpack)
//! - Motion sensor (PIR on a GPIO input)
//! - Binary outputs (LED, lamp optocoupler)

#![deny(unsafe_code)]

pub mod adc;
pub mod display;
pub mod output;
pub mod sensor;
