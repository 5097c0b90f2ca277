//! Slow fill effect
//!
//! Lights one more LED per tick until the ring is full, then wipes it
//! on the next tick and starts over.

use super::Effect;
use crate::{
    buffer::PixelBuffer,
    color::{BLUE, Rgb},
};

/// Fill-and-clear effect
#[derive(Debug, Clone)]
pub struct FillClearEffect {
    color: Rgb,
    /// Next LED to light, equals the ring size once the ring is full
    cursor: usize,
}

impl Default for FillClearEffect {
    fn default() -> Self {
        Self::new(BLUE)
    }
}

impl FillClearEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color, cursor: 0 }
    }

    /// Number of LEDs lit so far in the current cycle
    pub const fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Effect for FillClearEffect {
    fn tick<const N: usize>(&mut self, leds: &mut PixelBuffer<N>) {
        if self.cursor >= N {
            leds.clear();
            self.cursor = 0;
        } else {
            leds.set(self.cursor, self.color);
            self.cursor += 1;
        }
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}
