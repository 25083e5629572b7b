//! Hardware construction
//!
//! Opens the device nodes named in the configuration and wraps them in
//! the drivers the routines expect. Each program opens only what it uses.

use pisense_core::config::SystemConfig;
use pisense_drivers::adc::Pcf8591;
use pisense_drivers::display::{I2cLcd, LcdGeometry};
use pisense_drivers::output::GpioIndicator;
use pisense_drivers::sensor::PirSensor;
use pisense_hal_linux::{Delay, GpioChip, LineInput, LineOutput, LinuxI2c};

use crate::error::AppError;

pub type Adc = Pcf8591<LinuxI2c>;
pub type Lcd = I2cLcd<LinuxI2c, Delay>;
pub type Output = GpioIndicator<LineOutput>;
pub type Pir = PirSensor<LineInput, Delay>;

/// PCF8591 on the configured bus
pub fn open_adc(config: &SystemConfig) -> Result<Adc, AppError> {
    let bus = LinuxI2c::open(&config.i2c.device)?;
    Ok(Pcf8591::new(bus, config.adc.address))
}

/// Character LCD, initialised and cleared
pub fn open_lcd(config: &SystemConfig) -> Result<Lcd, AppError> {
    let bus = LinuxI2c::open(&config.i2c.device)?;
    let lcd = &config.lcd;
    let geometry = LcdGeometry {
        columns: lcd.columns,
        rows: lcd.rows,
    };

    let mut display = I2cLcd::new(bus, Delay, lcd.address, geometry, lcd.backlight);
    display.init()?;
    Ok(display)
}

/// Active-high output on `line`, switched off
pub fn open_output(config: &SystemConfig, line: u32) -> Result<Output, AppError> {
    let mut chip = GpioChip::open(&config.gpio.chip, &config.gpio.consumer)?;
    let pin = chip.output(line, false)?;
    Ok(GpioIndicator::new_active_high(pin)?)
}

/// PIR sensor on the configured input line
pub fn open_pir(config: &SystemConfig) -> Result<Pir, AppError> {
    let motion = &config.motion;
    let mut chip = GpioChip::open(&config.gpio.chip, &config.gpio.consumer)?;
    let pin = chip.input(motion.pin)?;
    Ok(PirSensor::new(
        pin,
        Delay,
        motion.active_high,
        motion.sample_interval(),
    ))
}
