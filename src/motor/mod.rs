//! Motor module for claw-motion.
//!
//! Provides the stepper entity, the enable gate, and the estop interlock.

mod gate;
mod interlock;
mod signal;
mod state;

pub use gate::EnableGate;
pub use interlock::{EstopInterlock, EstopStatus};
pub use signal::{InputLine, Line, OutputLine};
pub use state::{Snapshot, StepperState};
