//! Estop safety interlock.
//!
//! Polled once per coarse tick. An active input disables the driver and
//! freezes motion in place; the fault only clears after the input has stayed
//! inactive for the debounce hold. Clearing never re-enables the motor.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::InterlockConfig;
use crate::error::MotorError;

use super::gate::EnableGate;
use super::signal::{InputLine, Line, OutputLine};
use super::state::StepperState;

/// Interlock state reported after each poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EstopStatus {
    /// No fault; the motor may be re-enabled.
    Clear,
    /// Input is active.
    Active,
    /// Input released, debounce hold still running.
    Holding {
        /// Coarse ticks left before the fault clears.
        remaining: u32,
    },
}

impl EstopStatus {
    /// Whether re-arming is currently forbidden.
    #[inline]
    pub fn is_faulted(self) -> bool {
        !matches!(self, EstopStatus::Clear)
    }
}

/// Estop input, fault indicator and debounce counter.
pub struct EstopInterlock<IN, LED>
where
    IN: InputPin,
    LED: OutputPin,
{
    input: InputLine<IN>,
    indicator: OutputLine<LED>,
    debounce_ticks: u32,
    /// Coarse ticks left in the current hold.
    hold_remaining: u32,
    status: EstopStatus,
}

impl<IN, LED> EstopInterlock<IN, LED>
where
    IN: InputPin,
    LED: OutputPin,
{
    /// Create an interlock using the levels and hold time from `config`.
    pub fn new(input_pin: IN, indicator_pin: LED, config: &InterlockConfig) -> Self {
        Self {
            input: InputLine::new(input_pin, config.estop_level, Line::Estop),
            indicator: OutputLine::new(indicator_pin, config.fault_indicator_level, Line::FaultIndicator),
            debounce_ticks: config.debounce_ticks,
            hold_remaining: 0,
            status: EstopStatus::Clear,
        }
    }

    /// Sample the input once and drive the fault indicator to match.
    ///
    /// An estop already held at power-up faults the interlock before the
    /// first poll. The caller is expected to have the driver disabled.
    pub fn init(&mut self) -> Result<(), MotorError> {
        if self.input.is_active()? {
            warn!("estop held at startup");
            self.hold_remaining = self.debounce_ticks;
            self.status = EstopStatus::Active;
            self.indicator.set(true)
        } else {
            self.status = EstopStatus::Clear;
            self.indicator.set(false)
        }
    }

    /// Sample the input and apply the interlock policy.
    pub fn poll<EN, ELED>(
        &mut self,
        state: &mut StepperState,
        gate: &mut EnableGate<EN, ELED>,
    ) -> Result<EstopStatus, MotorError>
    where
        EN: OutputPin,
        ELED: OutputPin,
    {
        let status = if self.input.is_active()? {
            if !self.status.is_faulted() {
                warn!("estop tripped at position {}", state.position());
            }
            gate.set_enabled(state, false)?;
            state.stop();
            self.hold_remaining = self.debounce_ticks;
            self.indicator.set(true)?;
            EstopStatus::Active
        } else if self.hold_remaining > 0 {
            self.hold_remaining -= 1;
            self.indicator.set(true)?;
            EstopStatus::Holding {
                remaining: self.hold_remaining,
            }
        } else {
            if self.status.is_faulted() {
                info!("estop cleared, re-enable required");
            }
            self.indicator.set(false)?;
            EstopStatus::Clear
        };

        self.status = status;
        Ok(status)
    }

    /// Status from the most recent poll.
    #[inline]
    pub fn status(&self) -> EstopStatus {
        self.status
    }

    /// Whether re-arming is currently forbidden.
    #[inline]
    pub fn is_faulted(&self) -> bool {
        self.status.is_faulted()
    }

    /// Release the input and indicator pins.
    pub fn release(self) -> (IN, LED) {
        (self.input.release(), self.indicator.release())
    }
}
