//! Stepper entity: position, target, pacing and motion flags.
//!
//! Every write is validated against the travel range and the minimum pacing
//! period; a rejected write leaves the entity unchanged.

use crate::config::PositionLimits;
use crate::error::MotorError;

/// Read-only view of the stepper entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    /// Current position in steps.
    pub position: i32,
    /// Target position in steps.
    pub target: i32,
    /// Pacing period in fine ticks.
    pub period: u32,
    /// Whether a move is in progress.
    pub moving: bool,
    /// Whether the driver is enabled.
    pub enabled: bool,
}

/// The stepper motor state.
#[derive(Debug, Clone)]
pub struct StepperState {
    current_position: i32,
    target_position: i32,
    pacing_period: u32,
    moving: bool,
    enabled: bool,
    limits: PositionLimits,
    min_period: u32,
}

impl StepperState {
    /// Create the startup state: at the home position, disabled, not moving.
    ///
    /// `default_period` is raised to `min_period` if it is shorter.
    pub fn new(limits: PositionLimits, default_period: u32, min_period: u32) -> Self {
        let home = limits.home();
        Self {
            current_position: home,
            target_position: home,
            pacing_period: default_period.max(min_period),
            moving: false,
            enabled: false,
            limits,
            min_period,
        }
    }

    /// Reset to `initial_position` with the given pacing period, not moving and disabled.
    ///
    /// # Errors
    ///
    /// Returns `LimitExceeded` or `PeriodTooShort`; the state is left unchanged.
    pub fn initialize(&mut self, initial_position: i64, pacing_period: u32) -> Result<(), MotorError> {
        let position = self.limits.check(initial_position)?;
        self.check_period(pacing_period)?;

        self.current_position = position;
        self.target_position = position;
        self.pacing_period = pacing_period;
        self.moving = false;
        self.enabled = false;
        Ok(())
    }

    /// Set a new target and mark the stepper as moving.
    ///
    /// Sets `moving` even when already at `position`, which wakes a stalled move.
    pub fn set_target(&mut self, position: i64) -> Result<(), MotorError> {
        let position = self.limits.check(position)?;
        self.target_position = position;
        self.moving = true;
        Ok(())
    }

    /// Move relative to the current position.
    pub fn move_by(&mut self, delta: i64) -> Result<(), MotorError> {
        let target = (self.current_position as i64).saturating_add(delta);
        self.set_target(target)
    }

    /// Set the pacing period in fine ticks. Does not affect the motion flag.
    pub fn set_pacing_period(&mut self, period: u32) -> Result<(), MotorError> {
        self.check_period(period)?;
        self.pacing_period = period;
        Ok(())
    }

    /// Stop in place: target becomes the current position.
    pub fn stop(&mut self) {
        self.target_position = self.current_position;
        self.moving = false;
    }

    /// Redefine the current position without moving, cancelling any move.
    pub fn set_position(&mut self, position: i64) -> Result<(), MotorError> {
        let position = self.limits.check(position)?;
        self.current_position = position;
        self.target_position = position;
        self.moving = false;
        Ok(())
    }

    /// Record the enable flag. Driving the enable line is the gate's job.
    #[inline]
    pub(crate) fn set_enabled_flag(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Finish the move without further steps.
    #[inline]
    pub(crate) fn settle(&mut self) {
        self.moving = false;
    }

    /// Advance one step toward the target; clears `moving` on arrival.
    ///
    /// Never steps past the target, so the position stays in range.
    pub(crate) fn advance_toward_target(&mut self) {
        if self.current_position < self.target_position {
            self.current_position += 1;
        } else if self.current_position > self.target_position {
            self.current_position -= 1;
        }
        if self.current_position == self.target_position {
            self.moving = false;
        }
    }

    /// Current position in steps.
    #[inline]
    pub fn position(&self) -> i32 {
        self.current_position
    }

    /// Target position in steps.
    #[inline]
    pub fn target(&self) -> i32 {
        self.target_position
    }

    /// Pacing period in fine ticks.
    #[inline]
    pub fn pacing_period(&self) -> u32 {
        self.pacing_period
    }

    /// Whether a move is in progress.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Whether the driver is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the current position equals the target.
    #[inline]
    pub fn at_target(&self) -> bool {
        self.current_position == self.target_position
    }

    /// Read-only copy of the state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.current_position,
            target: self.target_position,
            period: self.pacing_period,
            moving: self.moving,
            enabled: self.enabled,
        }
    }

    fn check_period(&self, period: u32) -> Result<(), MotorError> {
        if period < self.min_period {
            return Err(MotorError::PeriodTooShort {
                period,
                min: self.min_period,
            });
        }
        Ok(())
    }
}
