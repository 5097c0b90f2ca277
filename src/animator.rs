use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::buffer::PixelBuffer;
use crate::color::{BLUE, Rgb};
use crate::effect::{EffectId, EffectSlot};
use crate::stop::StopSignal;

/// Number of LEDs on the Circuit Playground Express ring
pub const LED_COUNT: usize = 10;

/// Default pause between two frames
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(500);

/// Configuration for the animator
#[derive(Debug, Clone)]
pub struct AnimatorConfig {
    pub effect: EffectId,
    pub color: Rgb,
    pub frame_delay: Duration,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            effect: EffectId::FillClear,
            color: BLUE,
            frame_delay: DEFAULT_FRAME_DELAY,
        }
    }
}

/// Animator - owns the ring state and pushes it to the strip
///
/// N is the number of LEDs in the ring
pub struct Animator<D: OutputDriver, const N: usize> {
    // External dependencies and configuration
    driver: D,
    frame_delay: Duration,

    // Internal state
    effect: EffectSlot,
    buffer: PixelBuffer<N>,
    frames: u32,
}

impl<D: OutputDriver, const N: usize> Animator<D, N> {
    /// Create a new animator with every LED off
    pub fn new(driver: D, config: &AnimatorConfig) -> Self {
        Self {
            driver,
            frame_delay: config.frame_delay,
            effect: config.effect.to_slot(config.color),
            buffer: PixelBuffer::new(),
            frames: 0,
        }
    }

    /// Process one frame
    ///
    /// Advances the effect once and transmits the whole buffer.
    /// The caller is responsible for waiting `frame_delay` before the next tick.
    pub fn tick(&mut self) -> Result<(), D::Error> {
        self.effect.tick(&mut self.buffer);
        self.driver.write(self.buffer.as_slice())?;
        self.frames = self.frames.wrapping_add(1);
        Ok(())
    }

    /// Start the effect over from a dark ring
    pub fn restart(&mut self) {
        self.buffer.clear();
        self.effect.reset();
    }

    /// Run the effect until stopped
    ///
    /// The stop signal is checked before every frame. One-shot effects
    /// return right after their only frame. A failed write halts the
    /// animation and returns the driver error.
    pub fn run<T: DelayNs>(&mut self, delay: &mut T, stop: &StopSignal) -> Result<(), D::Error> {
        #[cfg(feature = "esp32-log")]
        println!("animator: starting {}", self.effect.id().as_str());

        let delay_us = u32::try_from(self.frame_delay.as_micros()).unwrap_or(u32::MAX);
        loop {
            if stop.is_raised() {
                #[cfg(feature = "esp32-log")]
                println!("animator: stopped after {} frames", self.frames);
                return Ok(());
            }

            self.tick().inspect_err(|_| {
                #[cfg(feature = "esp32-log")]
                println!("animator: write failed after {} frames, halting", self.frames);
            })?;

            if !self.effect.is_looping() {
                return Ok(());
            }
            delay.delay_us(delay_us);
        }
    }

    /// Current ring state
    pub const fn buffer(&self) -> &PixelBuffer<N> {
        &self.buffer
    }

    /// Id of the running effect
    pub fn effect_id(&self) -> EffectId {
        self.effect.id()
    }

    pub const fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// Number of frames written successfully
    pub const fn frames(&self) -> u32 {
        self.frames
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub const fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Release the output driver
    pub fn into_driver(self) -> D {
        self.driver
    }
}
