//! Tick timing configuration.

use serde::Deserialize;

/// Timer and pacing configuration.
///
/// The timer interrupt fires every `timer_interval_us`; every interrupt is a
/// fine tick and every `fine_ticks_per_coarse` interrupts make a coarse tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Fine tick interval in microseconds.
    pub timer_interval_us: u32,
    /// Number of fine ticks per coarse tick.
    pub fine_ticks_per_coarse: u32,
    /// Pacing period applied at startup, in fine ticks.
    pub default_period: u32,
    /// Shortest accepted pacing period, in fine ticks.
    pub min_period: u32,
}

impl TimingConfig {
    /// Convert a pacing period in fine ticks to microseconds.
    #[inline]
    pub fn ticks_to_us(&self, ticks: u32) -> u32 {
        ticks.saturating_mul(self.timer_interval_us)
    }

    /// Convert microseconds to whole fine ticks (truncating).
    #[inline]
    pub fn us_to_ticks(&self, us: u32) -> u32 {
        us / self.timer_interval_us
    }

    /// Shortest accepted pacing period in microseconds.
    #[inline]
    pub fn min_period_us(&self) -> u32 {
        self.ticks_to_us(self.min_period)
    }

    /// Coarse tick duration in microseconds.
    #[inline]
    pub fn coarse_interval_us(&self) -> u32 {
        self.ticks_to_us(self.fine_ticks_per_coarse)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        // 10 us timer, 1 ms coarse tick, 40 us step period (25 kHz)
        Self {
            timer_interval_us: 10,
            fine_ticks_per_coarse: 100,
            default_period: 4,
            min_period: 4,
        }
    }
}
