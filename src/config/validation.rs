//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use crate::indicator::MIN_BLINK_PERIOD;

use super::ClawConfig;

/// Validate a claw configuration.
///
/// Checks:
/// - Travel range is non-empty (min < max)
/// - Timer interval and coarse ratio are non-zero
/// - Pacing periods allow a two-phase pulse (min >= 2, default >= min)
/// - Mechanics values are non-zero and the heartbeat can blink
pub fn validate_config(config: &ClawConfig) -> Result<()> {
    let limits = &config.limits;
    if !limits.is_valid() {
        return Err(Error::Config(ConfigError::InvalidLimits {
            min: limits.min_position,
            max: limits.max_position,
        }));
    }

    validate_timing(config)?;

    if config.motor.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
            config.motor.steps_per_revolution,
        )));
    }

    if config.motor.bump_steps == 0 {
        return Err(Error::Config(ConfigError::InvalidBumpSteps(config.motor.bump_steps)));
    }

    if config.indicator.heartbeat_period_ms < MIN_BLINK_PERIOD {
        return Err(Error::Config(ConfigError::InvalidHeartbeatPeriod(
            config.indicator.heartbeat_period_ms,
        )));
    }

    Ok(())
}

fn validate_timing(config: &ClawConfig) -> Result<()> {
    let timing = &config.timing;

    if timing.timer_interval_us == 0 {
        return Err(Error::Config(ConfigError::InvalidTimerInterval(
            timing.timer_interval_us,
        )));
    }

    if timing.fine_ticks_per_coarse == 0 {
        return Err(Error::Config(ConfigError::InvalidTickRatio(
            timing.fine_ticks_per_coarse,
        )));
    }

    // The generator raises the pulse at period / 2, which must be a distinct tick
    if timing.min_period < 2 {
        return Err(Error::Config(ConfigError::InvalidMinPeriod(timing.min_period)));
    }

    if timing.default_period < timing.min_period {
        return Err(Error::Config(ConfigError::InvalidDefaultPeriod {
            period: timing.default_period,
            min: timing.min_period,
        }));
    }

    Ok(())
}
