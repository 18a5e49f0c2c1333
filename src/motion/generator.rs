//! Step pulse generation paced by fine ticks.
//!
//! One call to [`StepGenerator::tick`] per fine tick. A full pulse cycle
//! lasts exactly `pacing_period` ticks: low for the first half, high for the
//! second, and the position advances when the pulse falls.

use embedded_hal::digital::OutputPin;

use crate::config::ActiveLevel;
use crate::error::MotorError;
use crate::motor::{Line, OutputLine, StepperState};

use super::Direction;

/// Where the generator is within the current pulse cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulsePhase {
    /// Not moving; pulse held low.
    Idle,
    /// Moving, pulse low, waiting for the half period.
    Armed,
    /// Moving, pulse high, waiting for the full period.
    High,
}

/// Step and direction line driver.
pub struct StepGenerator<STEP, DIR>
where
    STEP: OutputPin,
    DIR: OutputPin,
{
    step: OutputLine<STEP>,
    dir: OutputLine<DIR>,
    /// Fine ticks into the current pulse cycle.
    phase_ticks: u32,
}

impl<STEP, DIR> StepGenerator<STEP, DIR>
where
    STEP: OutputPin,
    DIR: OutputPin,
{
    /// Create a generator. Forward drives the direction line high unless inverted.
    pub fn new(step_pin: STEP, dir_pin: DIR, invert_direction: bool) -> Self {
        let dir_level = if invert_direction {
            ActiveLevel::Low
        } else {
            ActiveLevel::High
        };
        Self {
            step: OutputLine::new(step_pin, ActiveLevel::High, Line::Step),
            dir: OutputLine::new(dir_pin, dir_level, Line::Direction),
            phase_ticks: 0,
        }
    }

    /// Drive both lines to their idle level.
    pub fn init(&mut self) -> Result<(), MotorError> {
        self.step.set(false)?;
        self.dir.set(false)?;
        self.phase_ticks = 0;
        Ok(())
    }

    /// Process one fine tick.
    ///
    /// Returns whether the stepper is still moving.
    pub fn tick(&mut self, state: &mut StepperState) -> Result<bool, MotorError> {
        // Refreshed every tick so a new move never starts on a stale level
        let direction = Direction::toward(state.position(), state.target());
        self.dir.set(direction == Direction::Forward)?;

        if !state.is_moving() || !state.is_enabled() {
            self.idle()?;
            return Ok(state.is_moving());
        }

        if state.at_target() {
            // Woken by a target equal to the current position
            self.idle()?;
            state.settle();
            return Ok(false);
        }

        self.phase_ticks += 1;
        let period = state.pacing_period();

        // A position unit is only counted on the falling edge of a pulse that
        // was actually raised, even if the period shrank mid-cycle
        if !self.step.is_active() {
            if self.phase_ticks >= period / 2 {
                self.step.set(true)?;
            }
        } else if self.phase_ticks >= period {
            self.step.set(false)?;
            self.phase_ticks = 0;
            state.advance_toward_target();
            if !state.is_moving() {
                debug!("move complete at {}", state.position());
            }
        }

        Ok(state.is_moving())
    }

    /// Current pulse phase for `state`.
    pub fn phase(&self, state: &StepperState) -> PulsePhase {
        if self.step.is_active() {
            PulsePhase::High
        } else if state.is_moving() && state.is_enabled() {
            PulsePhase::Armed
        } else {
            PulsePhase::Idle
        }
    }

    /// Direction last written to the direction line.
    #[inline]
    pub fn direction(&self) -> Direction {
        if self.dir.is_active() {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Release the step and direction pins.
    pub fn release(self) -> (STEP, DIR) {
        (self.step.release(), self.dir.release())
    }

    fn idle(&mut self) -> Result<(), MotorError> {
        self.step.set(false)?;
        self.phase_ticks = 0;
        Ok(())
    }
}
