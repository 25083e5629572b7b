//! LCD banner

use pisense_core::config::SystemConfig;
use pisense_core::routines::{show_banner, Termination};

use crate::board;
use crate::error::AppError;
use crate::signals::TerminationSignals;

/// Show a line of text until a signal arrives, then clear the display
///
/// `text` and `row` override the configured ones.
pub fn lcd_task(
    config: &SystemConfig,
    text: Option<&str>,
    row: Option<u8>,
) -> Result<Termination, AppError> {
    // Installed before the display is touched so no signal can leave it lit
    let mut signals = TerminationSignals::install()?;
    let mut lcd = board::open_lcd(config)?;

    let text = text.unwrap_or(&config.lcd.text);
    let row = row.unwrap_or(config.lcd.row);

    let termination = show_banner(&mut lcd, text, row, config.lcd.align, || signals.wait())?;
    Ok(termination)
}
