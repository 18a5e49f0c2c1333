//! Motor configuration from TOML.

use serde::Deserialize;

use super::units::ActiveLevel;

/// Drive mechanics and signal polarity of the claw stepper.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorConfig {
    /// Steps per output revolution after microstepping (typically 200 * 16).
    pub steps_per_revolution: u32,

    /// Distance moved by a bump-down command, in steps.
    pub bump_steps: u32,

    /// Invert direction pin logic (forward drives the line low).
    pub invert_direction: bool,

    /// Active level of the driver enable input.
    #[serde(rename = "enable")]
    pub enable_level: ActiveLevel,

    /// Active level of the enable indicator LED.
    #[serde(rename = "enable_indicator")]
    pub enable_indicator_level: ActiveLevel,
}

impl MotorConfig {
    /// Convert a relative move in revolutions to steps, rounding to the nearest step.
    ///
    /// Returns `None` for non-finite input or results outside `i64`.
    pub fn rotations_to_steps(&self, rotations: f32) -> Option<i64> {
        if !rotations.is_finite() {
            return None;
        }
        let steps = libm::round(rotations as f64 * self.steps_per_revolution as f64);
        if steps >= i64::MIN as f64 && steps <= i64::MAX as f64 {
            Some(steps as i64)
        } else {
            None
        }
    }
}

impl Default for MotorConfig {
    fn default() -> Self {
        // 1.8 degree motor at 16 microsteps, quarter-turn bump
        Self {
            steps_per_revolution: 3200,
            bump_steps: 800,
            invert_direction: false,
            enable_level: ActiveLevel::Low,
            enable_indicator_level: ActiveLevel::High,
        }
    }
}
