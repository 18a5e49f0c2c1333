//! Command execution against the controller.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::controller::ClawController;
use crate::error::{CommandError, Result};

use super::parser::Command;
use super::response::Response;

impl<STEP, DIR, EN, ELED, ESTOP, FLED, HB> ClawController<STEP, DIR, EN, ELED, ESTOP, FLED, HB>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    ELED: OutputPin,
    ESTOP: InputPin,
    FLED: OutputPin,
    HB: OutputPin,
{
    /// Execute a parsed command.
    ///
    /// A rejected command leaves the controller unchanged.
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        let result = self.dispatch(command);
        if result.is_err() {
            warn!("{} rejected", command.keyword());
        }
        result
    }

    /// Parse and execute one console line.
    pub fn handle_line(&mut self, line: &str) -> Result<Response> {
        let command = Command::parse(line).map_err(|e| {
            warn!("unparseable command line");
            e
        })?;
        self.execute(command)
    }

    fn dispatch(&mut self, command: Command) -> Result<Response> {
        match command {
            Command::ClawSet(percent) => {
                self.require_enabled()?;
                let target = percent.to_position(&self.config().limits);
                self.set_target(target as i64)?;
                Ok(Response::ClawSet {
                    percent: percent.value(),
                    target,
                })
            }
            Command::LedPeriod(ms) => {
                self.set_heartbeat_period(ms)?;
                Ok(Response::LedPeriod(ms))
            }
            Command::SetStepperPeriod(us) => {
                self.set_pacing_period_us(us)?;
                Ok(Response::StepperPeriod(us))
            }
            Command::SetStepperZero => {
                self.set_position(0)?;
                Ok(Response::Zeroed)
            }
            Command::MoveAbsolute(position) => {
                self.require_enabled()?;
                self.set_target(position)?;
                Ok(self.moving())
            }
            Command::MoveRelative(delta) => {
                self.require_enabled()?;
                self.move_by(delta)?;
                Ok(self.moving())
            }
            Command::MoveRotations(rotations) => {
                self.require_enabled()?;
                let steps = self
                    .config()
                    .motor
                    .rotations_to_steps(rotations)
                    .ok_or(CommandError::MalformedArgument("move_stepper_rotations"))?;
                self.move_by(steps)?;
                Ok(Response::Rotating {
                    rotations,
                    target: self.state().target(),
                })
            }
            Command::BumpDown => {
                self.require_enabled()?;
                let steps = self.config().motor.bump_steps;
                self.move_by(-(steps as i64))?;
                Ok(Response::Bumping {
                    steps,
                    target: self.state().target(),
                })
            }
            Command::Stop => {
                self.stop();
                Ok(Response::Stopped(self.state().position()))
            }
            Command::Status => Ok(Response::Status(self.status())),
            Command::Enable => {
                self.set_enabled(true)?;
                Ok(Response::Enabled)
            }
            Command::Disable => {
                self.set_enabled(false)?;
                Ok(Response::Disabled)
            }
            Command::Help => Ok(Response::Help),
        }
    }

    fn moving(&self) -> Response {
        Response::Moving {
            target: self.state().target(),
        }
    }
}
