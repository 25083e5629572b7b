//! Signal handling
//!
//! Looping programs get a shutdown flag raised by SIGINT; a second SIGINT
//! while the first is still being handled exits at once. The LCD program
//! instead blocks until one of SIGINT, SIGTERM or SIGHUP arrives.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use pisense_core::routines::Termination;
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::flag;
use signal_hook::iterator::Signals;

use crate::error::AppError;

/// Install the SIGINT shutdown flag
pub fn shutdown_flag() -> Result<Arc<AtomicBool>, AppError> {
    let stop = Arc::new(AtomicBool::new(false));
    // Order matters: the conditional exit must see the flag still clear
    // on the first SIGINT
    flag::register_conditional_shutdown(SIGINT, 130, Arc::clone(&stop))
        .map_err(AppError::Signal)?;
    flag::register(SIGINT, Arc::clone(&stop)).map_err(AppError::Signal)?;
    Ok(stop)
}

/// Signals that end the LCD program
pub struct TerminationSignals {
    signals: Signals,
}

impl TerminationSignals {
    /// Take over SIGINT, SIGTERM and SIGHUP
    pub fn install() -> Result<Self, AppError> {
        let signals = Signals::new([SIGINT, SIGTERM, SIGHUP]).map_err(AppError::Signal)?;
        Ok(Self { signals })
    }

    /// Block until one of the signals arrives
    pub fn wait(&mut self) -> Termination {
        let signal = self.signals.forever().next();
        log::debug!("Received signal {:?}", signal);
        match signal {
            Some(SIGTERM) => Termination::Terminate,
            Some(SIGHUP) => Termination::HangUp,
            _ => Termination::Interrupt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    use signal_hook::low_level::raise;

    // One test: signal dispositions are process wide, so parallel tests
    // would steal each other's signals
    #[test]
    fn test_signals_map_to_termination_and_flag() {
        let mut signals = TerminationSignals::install().unwrap();

        raise(SIGTERM).unwrap();
        assert_eq!(signals.wait(), Termination::Terminate);
        raise(SIGHUP).unwrap();
        assert_eq!(signals.wait(), Termination::HangUp);
        raise(SIGINT).unwrap();
        assert_eq!(signals.wait(), Termination::Interrupt);
        drop(signals);

        // A single SIGINT only raises the flag; a second one would exit
        let stop = shutdown_flag().unwrap();
        assert!(!stop.load(Ordering::Relaxed));
        raise(SIGINT).unwrap();
        assert!(stop.load(Ordering::Relaxed));
    }
}
