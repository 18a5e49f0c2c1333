//! Polarity-aware digital lines.
//!
//! Wraps embedded-hal pins so callers work in logical active/inactive terms
//! and pin failures are reported with the line that failed.

use core::fmt;

use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::ActiveLevel;
use crate::error::MotorError;

/// Identifies a physical line in error reports and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Step pulse output.
    Step,
    /// Direction output.
    Direction,
    /// Driver enable output.
    Enable,
    /// Enable indicator LED.
    EnableIndicator,
    /// Estop fault indicator LED.
    FaultIndicator,
    /// Estop input.
    Estop,
    /// Heartbeat LED.
    Heartbeat,
}

impl Line {
    /// Line name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            Line::Step => "step",
            Line::Direction => "direction",
            Line::Enable => "enable",
            Line::EnableIndicator => "enable indicator",
            Line::FaultIndicator => "fault indicator",
            Line::Estop => "estop",
            Line::Heartbeat => "heartbeat",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output pin driven in logical terms.
pub struct OutputLine<P: OutputPin> {
    pin: P,
    level: ActiveLevel,
    line: Line,
    active: bool,
}

impl<P: OutputPin> OutputLine<P> {
    /// Wrap an output pin. The line is not driven until the first `set`.
    pub fn new(pin: P, level: ActiveLevel, line: Line) -> Self {
        Self {
            pin,
            level,
            line,
            active: false,
        }
    }

    /// Drive the line to its active or inactive level.
    pub fn set(&mut self, active: bool) -> Result<(), MotorError> {
        let result = if self.level.physical(active) {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| MotorError::Pin(self.line))?;
        self.active = active;
        Ok(())
    }

    /// Last logical state successfully written.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Release the underlying pin.
    pub fn release(self) -> P {
        self.pin
    }
}

/// Input pin read in logical terms.
pub struct InputLine<P: InputPin> {
    pin: P,
    level: ActiveLevel,
    line: Line,
}

impl<P: InputPin> InputLine<P> {
    /// Wrap an input pin.
    pub fn new(pin: P, level: ActiveLevel, line: Line) -> Self {
        Self { pin, level, line }
    }

    /// Read whether the line is at its active level.
    pub fn is_active(&mut self) -> Result<bool, MotorError> {
        let high = self.pin.is_high().map_err(|_| MotorError::Pin(self.line))?;
        Ok(self.level.is_active(high))
    }

    /// Release the underlying pin.
    pub fn release(self) -> P {
        self.pin
    }
}
