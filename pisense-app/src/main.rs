//! pisense - sensor and GPIO programs for Raspberry Pi class boards
//!
//! One binary, one subcommand per program:
//!
//! - `thermistor`: temperature from an NTC on the PCF8591
//! - `photoresistor`: raw light level from the PCF8591
//! - `blink`: blink an LED
//! - `motion`: report PIR motion
//! - `lcd`: show a line of text on a character LCD until signalled
//! - `bulb`: switch a lamp from the light level and time of day
//!
//! Results go to stdout; diagnostics go through `log` to stderr
//! (`RUST_LOG=debug` for bus level detail).

mod board;
mod config;
mod error;
mod signals;
mod tasks;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::error::AppError;

/// Sensor and GPIO programs for Raspberry Pi class boards.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Configuration file [default: /etc/pisense.toml if present, else built in]
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the thermistor temperature every interval
    Thermistor {
        /// Print a single bare reading and exit
        #[arg(long)]
        once: bool,
    },

    /// Print the photoresistor light level
    Photoresistor {
        /// Also log the light status band
        #[arg(long)]
        status: bool,
    },

    /// Blink the LED
    Blink,

    /// Print a line for every detected motion
    Motion,

    /// Show text on the LCD until SIGINT, SIGTERM or SIGHUP
    Lcd {
        /// Text to show instead of the configured one
        text: Option<String>,

        /// Row to start on (1-based)
        #[arg(long)]
        row: Option<u8>,
    },

    /// Switch the lamp from light level and time of day
    Bulb,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, AppError> {
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Thermistor { once } => {
            tasks::thermistor_task(&config, once, &signals::shutdown_flag()?)?
        }
        Command::Photoresistor { status } => {
            tasks::photoresistor_task(&config, status, &signals::shutdown_flag()?)?
        }
        Command::Blink => tasks::blink_task(&config, &signals::shutdown_flag()?)?,
        Command::Motion => tasks::motion_task(&config, &signals::shutdown_flag()?)?,
        Command::Bulb => tasks::bulb_task(&config, &signals::shutdown_flag()?)?,
        Command::Lcd { text, row } => {
            let termination = tasks::lcd_task(&config, text.as_deref(), row)?;
            return Ok(ExitCode::from(termination.exit_code()));
        }
    }

    Ok(ExitCode::SUCCESS)
}
