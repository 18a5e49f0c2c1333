//! Heartbeat LED blink scheduler.
//!
//! Advanced once per coarse tick: on for the first half of the period, off
//! for the second.

use embedded_hal::digital::OutputPin;

use crate::config::IndicatorConfig;
use crate::error::MotorError;
use crate::motor::{Line, OutputLine};

/// Shortest period with both an on and an off phase.
pub const MIN_BLINK_PERIOD: u32 = 2;

/// Blinking status LED.
pub struct Heartbeat<LED: OutputPin> {
    led: OutputLine<LED>,
    period: u32,
    count: u32,
}

impl<LED: OutputPin> Heartbeat<LED> {
    /// Create a heartbeat with the period and polarity from `config`.
    ///
    /// Periods below [`MIN_BLINK_PERIOD`] are raised to it.
    pub fn new(led_pin: LED, config: &IndicatorConfig) -> Self {
        Self {
            led: OutputLine::new(led_pin, config.heartbeat_level, Line::Heartbeat),
            period: config.heartbeat_period_ms.max(MIN_BLINK_PERIOD),
            count: 0,
        }
    }

    /// Drive the LED off and restart the cycle.
    pub fn init(&mut self) -> Result<(), MotorError> {
        self.count = 0;
        self.led.set(false)
    }

    /// Change the blink period in coarse ticks. Restarts the cycle.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::InvalidBlinkPeriod` below [`MIN_BLINK_PERIOD`].
    pub fn set_period(&mut self, period: u32) -> Result<(), MotorError> {
        if period < MIN_BLINK_PERIOD {
            return Err(MotorError::InvalidBlinkPeriod);
        }
        self.period = period;
        self.count = 0;
        Ok(())
    }

    /// Blink period in coarse ticks.
    #[inline]
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Whether the LED is currently lit.
    #[inline]
    pub fn is_lit(&self) -> bool {
        self.led.is_active()
    }

    /// Advance one coarse tick.
    pub fn tick(&mut self) -> Result<(), MotorError> {
        if self.count == 0 {
            self.led.set(true)?;
        } else if self.count == self.period / 2 {
            self.led.set(false)?;
        }
        self.count += 1;
        if self.count >= self.period {
            self.count = 0;
        }
        Ok(())
    }

    /// Release the LED pin.
    pub fn release(self) -> LED {
        self.led.release()
    }
}
