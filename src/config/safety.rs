//! Estop interlock and indicator configuration.

use serde::Deserialize;

use super::units::ActiveLevel;

/// Estop input configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterlockConfig {
    /// Coarse ticks the input must stay inactive before the fault clears.
    pub debounce_ticks: u32,

    /// Level at which the estop input signals a fault.
    #[serde(rename = "estop")]
    pub estop_level: ActiveLevel,

    /// Active level of the fault indicator LED.
    #[serde(rename = "fault_indicator")]
    pub fault_indicator_level: ActiveLevel,
}

impl Default for InterlockConfig {
    fn default() -> Self {
        // Pulled-up input, switch shorts to ground; 100 ms hold at 1 ms coarse ticks
        Self {
            debounce_ticks: 100,
            estop_level: ActiveLevel::Low,
            fault_indicator_level: ActiveLevel::High,
        }
    }
}

/// Heartbeat LED configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorConfig {
    /// Full blink period in coarse ticks (milliseconds at the default timing).
    pub heartbeat_period_ms: u32,

    /// Active level of the heartbeat LED.
    #[serde(rename = "heartbeat")]
    pub heartbeat_level: ActiveLevel,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            heartbeat_period_ms: 1000,
            heartbeat_level: ActiveLevel::High,
        }
    }
}
