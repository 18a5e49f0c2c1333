//! Motor enable gate.
//!
//! Drives the driver enable line and its indicator together and keeps both in
//! step with the logical flag in [`StepperState`].

use embedded_hal::digital::OutputPin;

use crate::config::MotorConfig;
use crate::error::MotorError;

use super::signal::{Line, OutputLine};
use super::state::StepperState;

/// Enable line plus paired indicator LED.
pub struct EnableGate<EN, LED>
where
    EN: OutputPin,
    LED: OutputPin,
{
    enable: OutputLine<EN>,
    indicator: OutputLine<LED>,
}

impl<EN, LED> EnableGate<EN, LED>
where
    EN: OutputPin,
    LED: OutputPin,
{
    /// Create a gate using the polarities from `config`.
    pub fn new(enable_pin: EN, indicator_pin: LED, config: &MotorConfig) -> Self {
        Self {
            enable: OutputLine::new(enable_pin, config.enable_level, Line::Enable),
            indicator: OutputLine::new(indicator_pin, config.enable_indicator_level, Line::EnableIndicator),
        }
    }

    /// Set the enable flag and drive both lines to match.
    pub fn set_enabled(&mut self, state: &mut StepperState, enable: bool) -> Result<(), MotorError> {
        state.set_enabled_flag(enable);
        self.refresh(enable)
    }

    /// Re-drive both lines from the logical flag.
    pub fn refresh(&mut self, enabled: bool) -> Result<(), MotorError> {
        self.enable.set(enabled)?;
        self.indicator.set(enabled)
    }

    /// Whether the enable line was last driven active.
    #[inline]
    pub fn is_driven(&self) -> bool {
        self.enable.is_active()
    }

    /// Release the enable and indicator pins.
    pub fn release(self) -> (EN, LED) {
        (self.enable.release(), self.indicator.release())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PositionLimits;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    #[test]
    fn test_enable_active_low() {
        // Default config: enable active-low, indicator active-high
        let en_expect = [Transaction::set(State::Low), Transaction::set(State::High)];
        let led_expect = [Transaction::set(State::High), Transaction::set(State::Low)];
        let mut en = PinMock::new(&en_expect);
        let mut led = PinMock::new(&led_expect);

        let mut gate = EnableGate::new(en.clone(), led.clone(), &MotorConfig::default());
        let mut state = StepperState::new(PositionLimits::new(0, 100), 4, 4);

        gate.set_enabled(&mut state, true).unwrap();
        assert!(state.is_enabled());
        assert!(gate.is_driven());

        gate.set_enabled(&mut state, false).unwrap();
        assert!(!state.is_enabled());
        assert!(!gate.is_driven());

        en.done();
        led.done();
    }
}
