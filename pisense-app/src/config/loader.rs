//! Configuration file lookup
//!
//! An explicit `--config` path wins. Without one, `/etc/pisense.toml` is
//! used when it exists, else the configuration built into the binary.

use std::fs;
use std::path::Path;

use pisense_core::config::SystemConfig;

use crate::error::AppError;

/// Configuration built into the binary
pub const EMBEDDED_CONFIG: &str = include_str!("../../pisense.toml");

/// System-wide configuration file
pub const SYSTEM_CONFIG_PATH: &str = "/etc/pisense.toml";

/// Load the configuration
pub fn load_config(path: Option<&Path>) -> Result<SystemConfig, AppError> {
    let system = Path::new(SYSTEM_CONFIG_PATH);
    let path = path.or_else(|| system.exists().then_some(system));

    let config = match path {
        Some(path) => {
            log::debug!("Loading configuration from {}", path.display());
            let text = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
            parse_config(&text)?
        }
        None => {
            log::debug!("Using built-in configuration");
            parse_config(EMBEDDED_CONFIG)?
        }
    };

    log_config_summary(&config);
    Ok(config)
}

/// Parse and validate TOML configuration
///
/// Missing tables and keys take their defaults.
pub fn parse_config(text: &str) -> Result<SystemConfig, AppError> {
    let config: SystemConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &SystemConfig) {
    log::debug!("  I2C bus {}, GPIO chip {}", config.i2c.device, config.gpio.chip);
    log::debug!(
        "  ADC {:#04x} (thermistor ch {}, photoresistor ch {})",
        config.adc.address,
        config.thermistor.channel,
        config.photoresistor.channel
    );
    log::debug!(
        "  LED line {}, PIR line {}, bulb line {}",
        config.blink.pin,
        config.motion.pin,
        config.bulb.pin
    );
    log::debug!(
        "  LCD {:#04x} {}x{}",
        config.lcd.address,
        config.lcd.columns,
        config.lcd.rows
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pisense_core::bulb::BulbMode;
    use pisense_core::config::ConfigError;
    use pisense_core::layout::Align;

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = parse_config(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config, SystemConfig::default());
    }

    #[test]
    fn test_empty_file_is_defaults() {
        assert_eq!(parse_config("").unwrap(), SystemConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = parse_config(
            r#"
            [blink]
            cycles = 10
            on_ms = 250

            [lcd]
            text = "Kitchen"
            align = "center"

            [bulb]
            mode = "manual"
            manual_state = "on"
            "#,
        )
        .unwrap();

        assert_eq!(config.blink.cycles, 10);
        assert_eq!(config.blink.on_ms, 250);
        assert_eq!(config.blink.off_ms, 500);
        assert_eq!(config.blink.pin, 26);
        assert_eq!(config.lcd.text, "Kitchen");
        assert_eq!(config.lcd.align, Align::Center);
        assert_eq!(config.lcd.address, 0x27);
        assert_eq!(config.bulb.mode, BulbMode::Manual);
        assert!(config.bulb.manual_state.is_on());
        assert_eq!(config.thermistor, SystemConfig::default().thermistor);
    }

    #[test]
    fn test_motion_timeout_is_optional() {
        let config = parse_config("[motion]\nwait_timeout_ms = 5000").unwrap();
        assert_eq!(config.motion.wait_timeout_ms, Some(5000));
        assert_eq!(SystemConfig::default().motion.wait_timeout_ms, None);
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let result = parse_config("[thermistor]\nchannel = 6");
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::InvalidChannel(6)))
        ));
    }

    #[test]
    fn test_malformed_file_rejected() {
        assert!(matches!(
            parse_config("[adc]\naddress = \"0x48\""),
            Err(AppError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("/nonexistent/pisense.toml");
        match load_config(Some(path)) {
            Err(AppError::ConfigRead { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
