//! System configuration - root configuration structure.

use serde::Deserialize;

use super::limits::PositionLimits;
use super::motor::MotorConfig;
use super::safety::{IndicatorConfig, InterlockConfig};
use super::timing::TimingConfig;

/// Root configuration structure from TOML.
///
/// Every section is optional; missing values fall back to the claw's
/// stock hardware settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClawConfig {
    /// Travel range.
    pub limits: PositionLimits,
    /// Timer and pacing.
    pub timing: TimingConfig,
    /// Drive mechanics and output polarity.
    pub motor: MotorConfig,
    /// Estop input and fault indicator.
    pub interlock: InterlockConfig,
    /// Heartbeat LED.
    pub indicator: IndicatorConfig,
}
