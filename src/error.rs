//! Error types for claw-motion.
//!
//! Provides unified error handling across configuration, motor control, and command handling.

use core::fmt;

use crate::motor::Line;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all claw-motion operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor operation error
    Motor(MotorError),
    /// Command parsing error
    Command(CommandError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Position bounds are empty or inverted (min must be < max)
    InvalidLimits {
        /// Minimum position
        min: i32,
        /// Maximum position
        max: i32,
    },
    /// Minimum pacing period must be at least 2 ticks
    InvalidMinPeriod(u32),
    /// Default pacing period is below the configured minimum
    InvalidDefaultPeriod {
        /// Configured default
        period: u32,
        /// Configured minimum
        min: u32,
    },
    /// Timer interval must be > 0
    InvalidTimerInterval(u32),
    /// Fine ticks per coarse tick must be > 0
    InvalidTickRatio(u32),
    /// Steps per revolution must be > 0
    InvalidStepsPerRevolution(u32),
    /// Bump distance must be > 0
    InvalidBumpSteps(u32),
    /// Heartbeat period must be at least 2
    InvalidHeartbeatPeriod(u32),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// Pin operation failed
    Pin(Line),
    /// Position outside the travel range
    LimitExceeded {
        /// Requested position
        position: i64,
        /// Lower bound
        min: i32,
        /// Upper bound
        max: i32,
    },
    /// Pacing period below the minimum
    PeriodTooShort {
        /// Requested period (ticks, or microseconds for the physical variant)
        period: u32,
        /// Minimum allowed, same unit as `period`
        min: u32,
    },
    /// Motion requested while the motor is disabled
    Disabled,
    /// Enable requested while the estop interlock is faulted
    EstopActive,
    /// Blink period must be at least 2 coarse ticks
    InvalidBlinkPeriod,
}

/// Command parsing errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Line exceeds the maximum command length
    TooLong(usize),
    /// Keyword is not in the command vocabulary
    Unknown(heapless::String<64>),
    /// Command requires an argument that was not given
    MissingArgument(&'static str),
    /// Argument could not be parsed as a number
    MalformedArgument(&'static str),
    /// Unexpected tokens after the command
    TrailingInput(&'static str),
    /// Percentage outside 0..=100
    PercentOutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Command(e) => write!(f, "Command error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidLimits { min, max } => {
                write!(f, "Invalid limits: min ({}) must be < max ({})", min, max)
            }
            ConfigError::InvalidMinPeriod(v) => {
                write!(f, "Invalid minimum period: {}. Must be >= 2 ticks", v)
            }
            ConfigError::InvalidDefaultPeriod { period, min } => {
                write!(f, "Invalid default period: {} is below minimum {}", period, min)
            }
            ConfigError::InvalidTimerInterval(v) => write!(f, "Invalid timer interval: {}. Must be > 0", v),
            ConfigError::InvalidTickRatio(v) => write!(f, "Invalid fine ticks per coarse tick: {}. Must be > 0", v),
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidBumpSteps(v) => write!(f, "Invalid bump steps: {}. Must be > 0", v),
            ConfigError::InvalidHeartbeatPeriod(v) => write!(f, "Invalid heartbeat period: {}. Must be >= 2", v),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::Pin(line) => write!(f, "GPIO operation failed on {} line", line),
            MotorError::LimitExceeded { position, min, max } => {
                write!(f, "Position {} outside range [{}, {}]", position, min, max)
            }
            MotorError::PeriodTooShort { period, min } => {
                write!(f, "Step period {} below minimum {}", period, min)
            }
            MotorError::Disabled => write!(f, "Stepper motor is disabled. Enable it first."),
            MotorError::EstopActive => write!(f, "Estop is active"),
            MotorError::InvalidBlinkPeriod => write!(f, "Blink period must be at least 2"),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::TooLong(len) => write!(f, "Command too long ({} characters)", len),
            CommandError::Unknown(cmd) => write!(f, "Unknown command: \"{}\"", cmd),
            CommandError::MissingArgument(cmd) => write!(f, "'{}' requires an argument", cmd),
            CommandError::MalformedArgument(cmd) => write!(f, "'{}' argument is not a valid number", cmd),
            CommandError::TrailingInput(cmd) => write!(f, "'{}' takes at most one argument", cmd),
            CommandError::PercentOutOfRange => write!(f, "Claw position must be between 0 and 100"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}
