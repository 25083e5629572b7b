//! Character display trait

use core::fmt;

use crate::layout::Align;

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// Communication error with the display controller
    Communication,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Communication => f.write_str("display communication failed"),
        }
    }
}

impl std::error::Error for DisplayError {}

/// Row-oriented text display (HD44780 style character LCD)
pub trait TextDisplay {
    /// Write text starting at `row` (1-based)
    ///
    /// The row is padded to the full width. Text that does not fit wraps
    /// onto the following rows while rows remain; the rest is dropped.
    fn write_text(&mut self, text: &str, row: u8, align: Align) -> Result<(), DisplayError>;

    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Switch the backlight on or off
    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError>;
}
