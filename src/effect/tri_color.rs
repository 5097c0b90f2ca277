//! Static three color pattern
//!
//! Repeats the palette along the ring: LED `i` gets `palette[i % 3]`.

use super::Effect;
use crate::{
    buffer::PixelBuffer,
    color::{BLUE, GREEN, RED, Rgb},
};

/// Static pattern effect, rendered once
#[derive(Debug, Clone)]
pub struct TriColorEffect {
    palette: [Rgb; 3],
}

impl Default for TriColorEffect {
    fn default() -> Self {
        Self::new([RED, GREEN, BLUE])
    }
}

impl TriColorEffect {
    pub const fn new(palette: [Rgb; 3]) -> Self {
        Self { palette }
    }
}

impl Effect for TriColorEffect {
    const LOOPING: bool = false;

    fn tick<const N: usize>(&mut self, leds: &mut PixelBuffer<N>) {
        for (i, led) in leds.as_mut_slice().iter_mut().enumerate() {
            *led = self.palette[i % self.palette.len()];
        }
    }
}
