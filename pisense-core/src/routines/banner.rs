//! LCD banner: show a line until told to stop

use crate::layout::Align;
use crate::traits::{DisplayError, TextDisplay};

/// Why a waiting program was asked to end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Keyboard interrupt (SIGINT)
    Interrupt,
    /// SIGTERM
    Terminate,
    /// SIGHUP
    HangUp,
}

impl Termination {
    /// Process exit status for this termination
    ///
    /// A keyboard interrupt is a normal way to end a foreground program;
    /// the other signals mean something outside stopped it.
    pub const fn exit_code(self) -> u8 {
        match self {
            Termination::Interrupt => 0,
            Termination::Terminate | Termination::HangUp => 1,
        }
    }
}

/// Write `text` at `row`, block in `wait`, then clear the display
///
/// The display is cleared even when writing the text failed, in which case
/// `wait` is not called and the write error is returned.
pub fn show_banner<D, W>(
    display: &mut D,
    text: &str,
    row: u8,
    align: Align,
    wait: W,
) -> Result<Termination, DisplayError>
where
    D: TextDisplay,
    W: FnOnce() -> Termination,
{
    let shown = display.write_text(text, row, align).map(|()| {
        log::info!("Showing {:?} on row {}", text, row);
        wait()
    });

    let cleared = display.clear();
    let termination = shown?;
    cleared?;

    log::info!("Display cleared ({:?})", termination);
    Ok(termination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DisplayOp, MockDisplay};

    #[test]
    fn test_writes_then_clears() {
        let mut display = MockDisplay::new();

        let result = show_banner(&mut display, "Hello Raspberry Pi 3", 1, Align::Left, || {
            Termination::Terminate
        });

        assert_eq!(result, Ok(Termination::Terminate));
        assert_eq!(
            display.ops,
            vec![
                DisplayOp::Text("Hello Raspberry Pi 3".into(), 1),
                DisplayOp::Clear,
            ]
        );
    }

    #[test]
    fn test_clears_after_failed_write() {
        let mut display = MockDisplay::failing_writes();

        let result = show_banner(&mut display, "x", 1, Align::Left, || {
            panic!("must not wait after a failed write")
        });

        assert_eq!(result, Err(DisplayError::Communication));
        assert_eq!(display.ops, vec![DisplayOp::Clear]);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Termination::Interrupt.exit_code(), 0);
        assert_eq!(Termination::Terminate.exit_code(), 1);
        assert_eq!(Termination::HangUp.exit_code(), 1);
    }
}
