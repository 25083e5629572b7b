//! Configuration loading
//!
//! Loads configuration from a file or the embedded defaults.

pub mod loader;

pub use loader::{load_config, parse_config};
