//! Console responses.

use core::fmt;

use crate::motor::Snapshot;

/// Text printed for `help`, an empty line, or an unknown command.
pub const HELP_TEXT: &str = "\
Available commands:
  claw_set <percent>                 - Set the claw position 0 to 100
  led_period <ms>                    - Set the LED blink period in milliseconds
  set_stepper_period <us>            - Set the stepper step period in us
  set_stepper_zero                   - Set the current position to zero
  move_stepper_absolute <steps>      - Move the stepper to an absolute position
  move_stepper_relative <steps>      - Move the stepper by a number of steps
  move_stepper_rotations <rotations> - Move the stepper by a number of rotations
  move_stepper_bump_down             - Move the stepper down by a fixed amount
  stop_stepper                       - Stop the stepper motor
  get_stepper_status                 - Show the stepper status
  enable_stepper                     - Enable the stepper motor
  disable_stepper                    - Disable the stepper motor
  help                               - Show this help message
";

/// Stepper status as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReport {
    /// Entity snapshot; `period` is in fine ticks.
    pub snapshot: Snapshot,
    /// Pacing period in microseconds.
    pub period_us: u32,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let yes_no = |b: bool| if b { "Yes" } else { "No" };
        writeln!(f, "Stepper Status:")?;
        writeln!(f, "  Current Position: {}", self.snapshot.position)?;
        writeln!(f, "  Target Position: {}", self.snapshot.target)?;
        writeln!(f, "  Step Period (us): {}", self.period_us)?;
        writeln!(f, "  Moving: {}", yes_no(self.snapshot.moving))?;
        write!(f, "  Enabled: {}", yes_no(self.snapshot.enabled))
    }
}

/// Outcome of a successfully executed command.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Response {
    /// Claw target set from a percentage.
    ClawSet {
        /// Requested opening.
        percent: f32,
        /// Resulting target in steps.
        target: i32,
    },
    /// Heartbeat period changed (ms).
    LedPeriod(u32),
    /// Step period changed (us).
    StepperPeriod(u32),
    /// Current position redefined as zero.
    Zeroed,
    /// Move started toward the given target.
    Moving {
        /// Target in steps.
        target: i32,
    },
    /// Relative move by revolutions started.
    Rotating {
        /// Requested revolutions.
        rotations: f32,
        /// Target in steps.
        target: i32,
    },
    /// Bump-down move started.
    Bumping {
        /// Bump distance in steps.
        steps: u32,
        /// Target in steps.
        target: i32,
    },
    /// Stopped at the given position.
    Stopped(i32),
    /// Status report.
    Status(StatusReport),
    /// Driver enabled.
    Enabled,
    /// Driver disabled.
    Disabled,
    /// Help text.
    Help,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::ClawSet { percent, target } => {
                write!(f, "Claw position set to {:.2}% ({})", percent, target)
            }
            Response::LedPeriod(ms) => write!(f, "LED period set to {} ms", ms),
            Response::StepperPeriod(us) => write!(f, "Stepper step period set to {} us", us),
            Response::Zeroed => write!(f, "Stepper position set to zero"),
            Response::Moving { target } => write!(f, "Moving stepper to position {}", target),
            Response::Rotating { rotations, target } => {
                write!(f, "Moving stepper by {:+} rotations to position {}", rotations, target)
            }
            Response::Bumping { steps, target } => {
                write!(f, "Bumping stepper down by {} steps to position {}", steps, target)
            }
            Response::Stopped(position) => write!(f, "Stepper stopped at position {}", position),
            Response::Status(report) => write!(f, "{}", report),
            Response::Enabled => write!(f, "Stepper motor enabled"),
            Response::Disabled => write!(f, "Stepper motor disabled"),
            Response::Help => f.write_str(HELP_TEXT),
        }
    }
}
