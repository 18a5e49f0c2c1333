//! Configuration module for claw-motion.
//!
//! Provides types for loading and validating the claw's travel range, timing,
//! signal polarity, and interlock settings from TOML files (with `std` feature)
//! or from compiled-in defaults.

mod limits;
mod motor;
mod safety;
mod system;
mod timing;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use limits::PositionLimits;
pub use motor::MotorConfig;
pub use safety::{IndicatorConfig, InterlockConfig};
pub use system::ClawConfig;
pub use timing::TimingConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{ActiveLevel, Percent};
