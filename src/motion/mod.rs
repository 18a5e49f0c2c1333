//! Motion module for claw-motion.
//!
//! Provides tick-paced step pulse generation.

mod generator;

pub use generator::{PulsePhase, StepGenerator};

/// Direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward larger positions.
    Forward,
    /// Toward smaller positions (also used when already at target).
    Backward,
}

impl Direction {
    /// Direction that moves `current` toward `target`.
    #[inline]
    pub fn toward(current: i32, target: i32) -> Self {
        if target > current {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }
}
