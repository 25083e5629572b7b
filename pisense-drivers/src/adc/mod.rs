//! Analog-to-digital converters

pub mod pcf8591;

pub use pcf8591::Pcf8591;
