//! Cooperative stop signal for `no_std` environments.
//!
//! A single flag built on `critical-section`. Safe to raise from an interrupt
//! or another thread while the animation loop polls it between frames.

use core::cell::Cell;

use critical_section::Mutex;

/// Request for a running animation to stop at the next tick boundary.
pub struct StopSignal {
    raised: Mutex<Cell<bool>>,
}

impl StopSignal {
    /// Create a new lowered signal.
    pub const fn new() -> Self {
        Self {
            raised: Mutex::new(Cell::new(false)),
        }
    }

    /// Ask the animation to stop.
    pub fn raise(&self) {
        critical_section::with(|cs| self.raised.borrow(cs).set(true));
    }

    /// Lower the signal so the animation can be started again.
    pub fn reset(&self) {
        critical_section::with(|cs| self.raised.borrow(cs).set(false));
    }

    /// Check if a stop was requested.
    pub fn is_raised(&self) -> bool {
        critical_section::with(|cs| self.raised.borrow(cs).get())
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}
