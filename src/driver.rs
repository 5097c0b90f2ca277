//! Adapter for `smart-leds` strip drivers

use smart_leds::SmartLedsWrite;

use crate::{OutputDriver, Rgb};

/// Output driver backed by any [`SmartLedsWrite`] implementation
///
/// Wraps RMT, PIO, SPI or bit-banged WS2812 drivers. The data pin must be
/// configured as output before the first write; that is up to the HAL
/// that built the inner writer.
pub struct SmartLedsDriver<W> {
    writer: W,
}

impl<W> SmartLedsDriver<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Release the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    type Error = W::Error;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.writer.write(colors.iter().copied())
    }
}
