//! Fixed-size pixel buffer for the LED ring.

use crate::color::{OFF, Rgb, is_off};

/// Colors of every LED in the ring, in physical order
///
/// N is the number of LEDs in the ring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const N: usize> {
    leds: [Rgb; N],
}

#[allow(clippy::len_without_is_empty)]
impl<const N: usize> PixelBuffer<N> {
    /// Create a buffer with every LED turned off
    pub const fn new() -> Self {
        const { assert!(N > 0, "pixel buffer must hold at least one LED") };
        Self { leds: [OFF; N] }
    }

    /// Number of LEDs in the buffer
    #[allow(clippy::unused_self)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Set a single LED
    ///
    /// # Panics
    ///
    /// If `index` is not in `0..N`.
    pub fn set(&mut self, index: usize, color: Rgb) {
        assert!(index < N, "led index {index} out of range for ring of {N}");
        self.leds[index] = color;
    }

    /// Get the color of a single LED
    ///
    /// # Panics
    ///
    /// If `index` is not in `0..N`.
    pub fn get(&self, index: usize) -> Rgb {
        assert!(index < N, "led index {index} out of range for ring of {N}");
        self.leds[index]
    }

    /// Check if the LED at `index` emits any light
    pub fn is_lit(&self, index: usize) -> bool {
        !is_off(self.get(index))
    }

    /// Number of LEDs that emit any light
    pub fn lit_count(&self) -> usize {
        self.leds.iter().filter(|led| !is_off(**led)).count()
    }

    /// Turn every LED off
    pub fn clear(&mut self) {
        self.fill(OFF);
    }

    /// Set every LED to the same color
    pub fn fill(&mut self, color: Rgb) {
        self.leds = [color; N];
    }

    pub const fn as_slice(&self) -> &[Rgb] {
        &self.leds
    }

    pub const fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.leds
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> AsRef<[Rgb]> for PixelBuffer<N> {
    fn as_ref(&self) -> &[Rgb] {
        self.as_slice()
    }
}
