#![no_std]

pub mod animator;
pub mod buffer;
pub mod color;
pub mod driver;
pub mod effect;
pub mod frame_scheduler;
pub mod runner;
pub mod stop;
pub mod wrap;

pub use animator::{Animator, AnimatorConfig, DEFAULT_FRAME_DELAY, LED_COUNT};
pub use buffer::PixelBuffer;
pub use driver::SmartLedsDriver;
pub use effect::{EffectId, EffectSlot};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use runner::{fill_and_clear, spinning, static_pattern};
pub use stop::StopSignal;
pub use wrap::{decrement_wrapped, increment_wrapped};

pub use color::{BLUE, GREEN, OFF, RED, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The animator is generic over this trait.
pub trait OutputDriver {
    /// Error reported by the strip transport
    type Error;

    /// Write colors to the LED strip
    ///
    /// `colors` is always a full snapshot of the ring.
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}
