//! HD44780 character LCD behind a PCF8574 I2C backpack
//!
//! The backpack maps the expander's eight outputs onto the LCD in 4-bit
//! mode:
//!
//! ```text
//! P7..P4  D7..D4   data nibble
//! P3      BL       backlight transistor
//! P2      E        enable (latches on the falling edge)
//! P1      RW       always 0 (write only)
//! P0      RS       0 = command, 1 = character
//! ```
//!
//! Every byte goes out as two nibbles, high first, each latched with an
//! enable pulse.

use embedded_hal::delay::DelayNs;
use pisense_core::layout::{self, Align};
use pisense_core::traits::{DisplayError, TextDisplay};
use pisense_hal::I2cBus;

const BACKLIGHT: u8 = 0x08;
const ENABLE: u8 = 0x04;

/// Register select for character data
const MODE_CHAR: u8 = 0x01;
const MODE_COMMAND: u8 = 0x00;

/// Enable pulse width and settle time, in microseconds
const PULSE_US: u32 = 500;

const CMD_CLEAR: u8 = 0x01;

/// Initialisation: force 8-bit mode twice, switch to 4-bit, entry mode
/// increment, display on without cursor, two-line 5x8 font, clear
const INIT_SEQUENCE: [u8; 6] = [0x33, 0x32, 0x06, 0x0C, 0x28, CMD_CLEAR];

/// DDRAM address commands of rows 1-4
const ROW_ADDRESSES: [u8; 4] = [0x80, 0xC0, 0x94, 0xD4];

/// Display size in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcdGeometry {
    pub columns: u8,
    pub rows: u8,
}

impl Default for LcdGeometry {
    fn default() -> Self {
        Self {
            columns: 20,
            rows: 4,
        }
    }
}

/// Row address command, falling back to row 1 for rows without one
fn row_address(row: u8) -> u8 {
    usize::from(row)
        .checked_sub(1)
        .and_then(|i| ROW_ADDRESSES.get(i))
        .copied()
        .unwrap_or(ROW_ADDRESSES[0])
}

/// Character LCD on an I2C bus
pub struct I2cLcd<B, D> {
    bus: B,
    delay: D,
    address: u8,
    geometry: LcdGeometry,
    backlight: bool,
}

impl<B: I2cBus, D: DelayNs> I2cLcd<B, D> {
    /// Create a driver without touching the bus
    ///
    /// Call [`I2cLcd::init`] before writing text.
    pub fn new(bus: B, delay: D, address: u8, geometry: LcdGeometry, backlight: bool) -> Self {
        Self {
            bus,
            delay,
            address,
            geometry,
            backlight,
        }
    }

    /// Put the controller into 4-bit mode and clear it
    pub fn init(&mut self) -> Result<(), DisplayError> {
        log::debug!(
            "Initialising {}x{} LCD at {:#04x}",
            self.geometry.columns,
            self.geometry.rows,
            self.address
        );
        for byte in INIT_SEQUENCE {
            self.send(byte, MODE_COMMAND)?;
        }
        Ok(())
    }

    /// Release the bus and delay
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    fn send(&mut self, byte: u8, mode: u8) -> Result<(), DisplayError> {
        let backlight = if self.backlight { BACKLIGHT } else { 0 };
        self.write_nibble(mode | (byte & 0xF0) | backlight)?;
        self.write_nibble(mode | ((byte << 4) & 0xF0) | backlight)
    }

    fn write_nibble(&mut self, bits: u8) -> Result<(), DisplayError> {
        self.write_raw(bits)?;
        self.write_raw(bits | ENABLE)?;
        self.delay.delay_us(PULSE_US);
        self.write_raw(bits & !ENABLE)?;
        self.delay.delay_us(PULSE_US);
        Ok(())
    }

    fn write_raw(&mut self, bits: u8) -> Result<(), DisplayError> {
        self.bus.write(self.address, &[bits]).map_err(|e| {
            log::warn!("LCD at {:#04x}: write failed: {:?}", self.address, e);
            DisplayError::Communication
        })
    }
}

impl<B: I2cBus, D: DelayNs> TextDisplay for I2cLcd<B, D> {
    fn write_text(&mut self, text: &str, row: u8, align: Align) -> Result<(), DisplayError> {
        let LcdGeometry { columns, rows } = self.geometry;

        // The character ROM only agrees with ASCII
        let text: String = text
            .chars()
            .map(|c| if c.is_ascii() { c } else { '?' })
            .collect();

        for (row, line) in layout::layout(&text, row, columns, rows, align) {
            self.send(row_address(row), MODE_COMMAND)?;
            for code in line.bytes() {
                self.send(code, MODE_CHAR)?;
            }
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.send(CMD_CLEAR, MODE_COMMAND)
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.backlight = on;
        // Any write latches the new backlight bit
        self.send(0, MODE_COMMAND)
    }
}
