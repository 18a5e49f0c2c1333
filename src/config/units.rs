//! Unit types for signal levels and operator-facing quantities.
//!
//! Keeps logical/physical level mapping and percent conversions in one
//! place so they cannot be mixed up at call sites.

use serde::Deserialize;

use crate::error::CommandError;

use super::limits::PositionLimits;

/// Electrical level at which a signal is considered active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Active when the line is high.
    #[default]
    High,
    /// Active when the line is low (inverted).
    Low,
}

impl ActiveLevel {
    /// Physical line level (`true` = high) that represents the logical state.
    #[inline]
    pub const fn physical(self, active: bool) -> bool {
        match self {
            ActiveLevel::High => active,
            ActiveLevel::Low => !active,
        }
    }

    /// Logical state represented by a physical line level.
    #[inline]
    pub const fn is_active(self, line_high: bool) -> bool {
        self.physical(line_high)
    }
}

/// Claw opening as a percentage of the travel range.
///
/// Validated at construction to be finite and within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Percent(f32);

impl Percent {
    /// Create a new Percent value with validation.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::PercentOutOfRange` for NaN, infinities, or values outside 0..=100.
    pub fn new(value: f32) -> Result<Self, CommandError> {
        if value.is_finite() && (0.0..=100.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CommandError::PercentOutOfRange)
        }
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Map linearly onto `[min_position, max_position]`, rounding to the nearest step.
    pub fn to_position(self, limits: &PositionLimits) -> i32 {
        let span = limits.span() as f64;
        let offset = libm::round(self.0 as f64 * span / 100.0) as i64;
        // 0..=100 keeps the offset within the span
        (limits.min_position as i64 + offset) as i32
    }
}
