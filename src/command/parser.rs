//! Command vocabulary and line parser.

use core::str::FromStr;

use heapless::String;

use crate::config::Percent;
use crate::error::CommandError;

/// Lines of this many characters or more are rejected.
pub const MAX_COMMAND_LENGTH: usize = 50;

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `claw_set <percent>`: move to a fraction of the travel range.
    ClawSet(Percent),
    /// `led_period <ms>`: heartbeat blink period.
    LedPeriod(u32),
    /// `set_stepper_period <us>`: pacing period in microseconds.
    SetStepperPeriod(u32),
    /// `set_stepper_zero`: redefine the current position as 0.
    SetStepperZero,
    /// `move_stepper_absolute <steps>`
    MoveAbsolute(i64),
    /// `move_stepper_relative <steps>`
    MoveRelative(i64),
    /// `move_stepper_rotations <revolutions>`
    MoveRotations(f32),
    /// `move_stepper_bump_down`: retract by the configured bump distance.
    BumpDown,
    /// `stop_stepper`
    Stop,
    /// `get_stepper_status`
    Status,
    /// `enable_stepper`
    Enable,
    /// `disable_stepper`
    Disable,
    /// `help`, or an empty line.
    Help,
}

impl Command {
    /// Parse one console line.
    ///
    /// Tokens are separated by whitespace. Each command takes exactly the
    /// arguments it names; anything extra is rejected.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let len = line.chars().count();
        if len >= MAX_COMMAND_LENGTH {
            return Err(CommandError::TooLong(len));
        }

        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(Command::Help);
        };
        let mut args = Args { tokens };

        let command = match keyword {
            "claw_set" => Command::ClawSet(Percent::new(args.number("claw_set")?)?),
            "led_period" => Command::LedPeriod(args.number("led_period")?),
            "set_stepper_period" => Command::SetStepperPeriod(args.number("set_stepper_period")?),
            "set_stepper_zero" => Command::SetStepperZero,
            "move_stepper_absolute" => Command::MoveAbsolute(args.number("move_stepper_absolute")?),
            "move_stepper_relative" => Command::MoveRelative(args.number("move_stepper_relative")?),
            "move_stepper_rotations" => Command::MoveRotations(args.number("move_stepper_rotations")?),
            "move_stepper_bump_down" => Command::BumpDown,
            "stop_stepper" => Command::Stop,
            "get_stepper_status" => Command::Status,
            "enable_stepper" => Command::Enable,
            "disable_stepper" => Command::Disable,
            "help" => Command::Help,
            other => return Err(CommandError::Unknown(truncated(other))),
        };

        args.finish(command.keyword())?;
        Ok(command)
    }

    /// Console keyword for this command.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::ClawSet(_) => "claw_set",
            Command::LedPeriod(_) => "led_period",
            Command::SetStepperPeriod(_) => "set_stepper_period",
            Command::SetStepperZero => "set_stepper_zero",
            Command::MoveAbsolute(_) => "move_stepper_absolute",
            Command::MoveRelative(_) => "move_stepper_relative",
            Command::MoveRotations(_) => "move_stepper_rotations",
            Command::BumpDown => "move_stepper_bump_down",
            Command::Stop => "stop_stepper",
            Command::Status => "get_stepper_status",
            Command::Enable => "enable_stepper",
            Command::Disable => "disable_stepper",
            Command::Help => "help",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

struct Args<I> {
    tokens: I,
}

impl<'a, I: Iterator<Item = &'a str>> Args<I> {
    fn number<T: Numeric>(&mut self, keyword: &'static str) -> Result<T, CommandError> {
        let token = self.tokens.next().ok_or(CommandError::MissingArgument(keyword))?;
        T::parse_arg(token).ok_or(CommandError::MalformedArgument(keyword))
    }

    fn finish(mut self, keyword: &'static str) -> Result<(), CommandError> {
        match self.tokens.next() {
            Some(_) => Err(CommandError::TrailingInput(keyword)),
            None => Ok(()),
        }
    }
}

trait Numeric: Sized {
    fn parse_arg(token: &str) -> Option<Self>;
}

impl Numeric for u32 {
    fn parse_arg(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

impl Numeric for i64 {
    fn parse_arg(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

impl Numeric for f32 {
    fn parse_arg(token: &str) -> Option<Self> {
        token.parse::<f32>().ok().filter(|v| v.is_finite())
    }
}

fn truncated(s: &str) -> String<64> {
    let mut out = String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Command::parse("stop_stepper"), Ok(Command::Stop));
        assert_eq!(Command::parse("  get_stepper_status  "), Ok(Command::Status));
        assert_eq!(Command::parse(""), Ok(Command::Help));
        assert_eq!(Command::parse("   "), Ok(Command::Help));
        assert_eq!(
            "move_stepper_absolute 1234".parse::<Command>(),
            Ok(Command::MoveAbsolute(1234))
        );
        assert_eq!(Command::parse("move_stepper_relative -200"), Ok(Command::MoveRelative(-200)));
        assert_eq!(Command::parse("move_stepper_rotations 1.5"), Ok(Command::MoveRotations(1.5)));
        assert_eq!(Command::parse("set_stepper_period 80"), Ok(Command::SetStepperPeriod(80)));
        assert_eq!(
            Command::parse("claw_set 50"),
            Ok(Command::ClawSet(Percent::new(50.0).unwrap()))
        );
    }

    #[test]
    fn test_keyword_roundtrip() {
        for line in ["stop_stepper", "enable_stepper", "disable_stepper", "move_stepper_bump_down"] {
            assert_eq!(Command::parse(line).unwrap().keyword(), line);
        }
    }

    #[test]
    fn test_argument_errors() {
        assert_eq!(
            Command::parse("move_stepper_absolute"),
            Err(CommandError::MissingArgument("move_stepper_absolute"))
        );
        assert_eq!(
            Command::parse("move_stepper_absolute 12ab"),
            Err(CommandError::MalformedArgument("move_stepper_absolute"))
        );
        assert_eq!(
            Command::parse("move_stepper_rotations nan"),
            Err(CommandError::MalformedArgument("move_stepper_rotations"))
        );
        assert_eq!(
            Command::parse("led_period -5"),
            Err(CommandError::MalformedArgument("led_period"))
        );
        assert_eq!(
            Command::parse("stop_stepper now"),
            Err(CommandError::TrailingInput("stop_stepper"))
        );
        assert_eq!(Command::parse("claw_set 101"), Err(CommandError::PercentOutOfRange));
    }

    #[test]
    fn test_unknown_and_too_long() {
        match Command::parse("open_sesame 3") {
            Err(CommandError::Unknown(k)) => assert_eq!(k.as_str(), "open_sesame"),
            other => panic!("unexpected {:?}", other),
        }

        // Whitespace counts toward the limit
        let long = "move_stepper_absolute 1                           ";
        assert_eq!(long.len(), 50);
        assert_eq!(Command::parse(long), Err(CommandError::TooLong(50)));
        assert_eq!(Command::parse(&long[..49]), Ok(Command::MoveAbsolute(1)));
    }
}
