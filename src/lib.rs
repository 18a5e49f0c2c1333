//! # claw-motion
//!
//! Tick-driven stepper motion core for a single-axis claw, with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Tick-paced stepping**: one step per pacing period, 50% duty pulse, never past the target
//! - **embedded-hal 1.0**: Uses `OutputPin` for STEP/DIR/ENABLE and the LEDs, `InputPin` for estop
//! - **no_std compatible**: Core library works without standard library
//! - **Estop interlock**: Trips immediately, clears only after a debounce hold, never re-arms on its own
//! - **Text commands**: Closed command set with a line assembler for serial consoles
//! - **Configuration-driven**: Travel range, timing and signal polarity from TOML or defaults
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use claw_motion::{ClawConfig, ClawController, ClawPins, TickSource};
//!
//! static TICKS: TickSource = TickSource::new(100);
//!
//! let mut claw = ClawController::new(ClawConfig::default(), ClawPins {
//!     step, dir, enable, enable_indicator, estop, fault_indicator, heartbeat,
//! })?;
//!
//! claw.execute("enable_stepper".parse()?)?;
//! claw.execute("claw_set 50".parse()?)?;
//!
//! loop {
//!     claw.service(&TICKS)?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets
//! - `critical-section`: Atomic tick counters on cores without native atomics

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Must come first so the logging macros are visible to every module
#[macro_use]
mod fmt;

// Core modules
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod indicator;
pub mod motion;
pub mod motor;
pub mod tick;

// Re-exports for ergonomic API
pub use command::{Command, CommandLineReader, LineEvent, LineReader, Response, StatusReport};
pub use config::{validate_config, ClawConfig};
pub use controller::{ClawController, ClawPins, Serviced};
pub use error::{Error, Result};
pub use motion::{Direction, PulsePhase, StepGenerator};
pub use motor::{EnableGate, EstopInterlock, EstopStatus, Snapshot, StepperState};
pub use tick::TickSource;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{ActiveLevel, Percent};
