mod utils;

use smart_leds::RGB8;
pub use utils::{is_off, rgb_from_u32};

pub type Rgb = RGB8;

/// Full-scale red
pub const RED: Rgb = rgb_from_u32(0xFF_00_00);
/// Full-scale green
///
/// Not the same as `smart_leds::colors::GREEN`, which is the CSS `#008000`.
pub const GREEN: Rgb = rgb_from_u32(0x00_FF_00);
/// Full-scale blue
pub const BLUE: Rgb = rgb_from_u32(0x00_00_FF);
/// LED turned off
pub const OFF: Rgb = rgb_from_u32(0);
