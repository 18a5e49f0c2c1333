//! Travel range configuration.

use serde::Deserialize;

use crate::error::MotorError;

/// Inclusive travel range in steps.
///
/// Out-of-range requests are rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PositionLimits {
    /// Minimum allowed position in steps.
    pub min_position: i32,
    /// Maximum allowed position in steps.
    pub max_position: i32,
}

impl PositionLimits {
    /// Create new limits.
    pub const fn new(min_position: i32, max_position: i32) -> Self {
        Self {
            min_position,
            max_position,
        }
    }

    /// Check if limits are valid (min < max).
    pub fn is_valid(&self) -> bool {
        self.min_position < self.max_position
    }

    /// Check if a position is within limits.
    pub fn contains(&self, position: i64) -> bool {
        position >= self.min_position as i64 && position <= self.max_position as i64
    }

    /// Number of steps between the bounds.
    pub fn span(&self) -> i64 {
        self.max_position as i64 - self.min_position as i64
    }

    /// Validate a requested position.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::LimitExceeded` if `position` is outside the range.
    pub fn check(&self, position: i64) -> Result<i32, MotorError> {
        if self.contains(position) {
            Ok(position as i32)
        } else {
            Err(MotorError::LimitExceeded {
                position,
                min: self.min_position,
                max: self.max_position,
            })
        }
    }

    /// Position used at power-up: zero if reachable, otherwise the lower bound.
    pub fn home(&self) -> i32 {
        if self.contains(0) {
            0
        } else {
            self.min_position
        }
    }
}

impl Default for PositionLimits {
    fn default() -> Self {
        // 3200 steps/rev * 12 revolutions of lead screw travel
        Self::new(0, 38400)
    }
}
