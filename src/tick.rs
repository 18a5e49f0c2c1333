//! Tick source shared between the timer interrupt and the main loop.
//!
//! The interrupt side only increments counters. The main loop drains one unit
//! at a time, so a backlog is preserved and worked off on later iterations.

use portable_atomic::{AtomicU32, Ordering};

/// Pending fine and coarse ticks.
///
/// Designed to live in a `static`:
///
/// ```rust,ignore
/// static TICKS: TickSource = TickSource::new(100);
///
/// #[interrupt]
/// fn TIMER_IRQ_0() {
///     TICKS.on_timer_interrupt();
/// }
/// ```
pub struct TickSource {
    fine: AtomicU32,
    coarse: AtomicU32,
    /// Interrupts since the last coarse tick. Written only by the interrupt.
    divider: AtomicU32,
    fine_per_coarse: u32,
}

impl TickSource {
    /// Create a tick source producing one coarse tick every `fine_per_coarse` interrupts.
    ///
    /// A ratio of 0 is treated as 1.
    pub const fn new(fine_per_coarse: u32) -> Self {
        Self {
            fine: AtomicU32::new(0),
            coarse: AtomicU32::new(0),
            divider: AtomicU32::new(0),
            fine_per_coarse: if fine_per_coarse == 0 { 1 } else { fine_per_coarse },
        }
    }

    /// Record one timer interrupt. Call from interrupt context only.
    #[inline]
    pub fn on_timer_interrupt(&self) {
        let count = self.divider.load(Ordering::Relaxed) + 1;
        if count >= self.fine_per_coarse {
            self.divider.store(0, Ordering::Relaxed);
            self.coarse.fetch_add(1, Ordering::Release);
        } else {
            self.divider.store(count, Ordering::Relaxed);
        }
        self.fine.fetch_add(1, Ordering::Release);
    }

    /// Take one pending fine tick. Returns `false` if none is pending.
    #[inline]
    pub fn take_fine(&self) -> bool {
        take(&self.fine)
    }

    /// Take one pending coarse tick. Returns `false` if none is pending.
    #[inline]
    pub fn take_coarse(&self) -> bool {
        take(&self.coarse)
    }

    /// Number of fine ticks not yet drained.
    #[inline]
    pub fn pending_fine(&self) -> u32 {
        self.fine.load(Ordering::Acquire)
    }

    /// Number of coarse ticks not yet drained.
    #[inline]
    pub fn pending_coarse(&self) -> u32 {
        self.coarse.load(Ordering::Acquire)
    }

    /// Fine ticks per coarse tick.
    #[inline]
    pub fn fine_per_coarse(&self) -> u32 {
        self.fine_per_coarse
    }
}

fn take(counter: &AtomicU32) -> bool {
    counter
        .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
        .is_ok()
}
