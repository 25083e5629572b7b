//! Configuration types
//!
//! Every section and key has a default matching the deployed board, so an
//! empty configuration file is valid.

mod types;

pub use types::*;
