//! Spinning dot effect

use super::Effect;
use crate::{
    buffer::PixelBuffer,
    color::{GREEN, OFF, Rgb},
    wrap::{decrement_wrapped, increment_wrapped},
};

/// Single lit LED moving one position per tick
///
/// Each tick turns off the LED behind the cursor before lighting the
/// cursor itself. On the very first tick that is the last LED of the
/// ring, which is still off.
#[derive(Debug, Clone)]
pub struct SpinningEffect {
    color: Rgb,
    cursor: usize,
}

impl Default for SpinningEffect {
    fn default() -> Self {
        Self::new(GREEN)
    }
}

impl SpinningEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color, cursor: 0 }
    }

    /// Index that will be lit on the next tick
    pub const fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Effect for SpinningEffect {
    fn tick<const N: usize>(&mut self, leds: &mut PixelBuffer<N>) {
        leds.set(decrement_wrapped(self.cursor, N), OFF);
        leds.set(self.cursor, self.color);
        self.cursor = increment_wrapped(self.cursor, N);
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}
