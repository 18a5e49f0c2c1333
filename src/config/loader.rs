//! Reads a claw configuration file on the host (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::ClawConfig;

/// Read and validate a claw configuration file.
///
/// # Errors
///
/// `IoError` if the file cannot be read, otherwise anything [`parse_config`]
/// reports.
///
/// # Example
///
/// ```rust,ignore
/// use claw_motion::{load_config, ClawController, ClawPins};
///
/// let config = load_config("claw.toml")?;
/// let claw = ClawController::new(config, ClawPins {
///     step, dir, enable, enable_indicator, estop, fault_indicator, heartbeat,
/// })?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClawConfig> {
    let text = fs::read_to_string(path.as_ref())
        .map_err(|e| Error::Config(ConfigError::IoError(bounded_message(&e.to_string()))))?;
    parse_config(&text)
}

/// Parse claw settings from TOML text. Missing sections take their defaults.
///
/// # Errors
///
/// `ParseError` for malformed TOML or mistyped values, or the validation
/// error for settings the controller could not run with.
pub fn parse_config(text: &str) -> Result<ClawConfig> {
    let config: ClawConfig = toml::from_str(text)
        .map_err(|e| Error::Config(ConfigError::ParseError(bounded_message(e.message()))))?;
    super::validation::validate_config(&config)?;
    Ok(config)
}

/// Keep as much of `msg` as fits the error's fixed buffer.
fn bounded_message(msg: &str) -> heapless::String<128> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActiveLevel;

    #[test]
    fn test_empty_file_uses_stock_claw_settings() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ClawConfig::default());
        assert_eq!(config.limits.max_position, 38400);
        assert_eq!(config.indicator.heartbeat_period_ms, 1000);
    }

    #[test]
    fn test_short_travel_with_high_estop() {
        let toml = r#"
[limits]
max_position = 6400

[timing]
default_period = 10

[interlock]
estop = "high"
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.limits.min_position, 0);
        assert_eq!(config.limits.max_position, 6400);
        assert_eq!(config.timing.default_period, 10);
        assert_eq!(config.timing.min_period, 4);
        assert_eq!(config.interlock.estop_level, ActiveLevel::High);
        assert_eq!(config.interlock.debounce_ticks, 100);
        assert_eq!(config.motor.enable_level, ActiveLevel::Low);
    }

    #[test]
    fn test_inverted_travel_range_rejected() {
        let toml = r#"
[limits]
min_position = 10
max_position = 5
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::InvalidLimits { .. }))
        ));
    }

    #[test]
    fn test_unblinkable_heartbeat_rejected() {
        assert!(matches!(
            parse_config("[indicator]\nheartbeat_period_ms = 1\n"),
            Err(Error::Config(ConfigError::InvalidHeartbeatPeriod(1)))
        ));
    }

    #[test]
    fn test_mistyped_timer_interval_reported() {
        let result = parse_config("[timing]\ntimer_interval_us = \"fast\"\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_missing_claw_file_is_io_error() {
        let path = std::env::temp_dir().join("claw-motion-no-such-dir").join("claw.toml");
        assert!(matches!(
            load_config(path),
            Err(Error::Config(ConfigError::IoError(_)))
        ));
    }

    #[test]
    fn test_long_message_fits_error_buffer() {
        let long = "x".repeat(300);
        assert_eq!(bounded_message(&long).len(), 128);
    }
}
