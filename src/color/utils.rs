use super::{OFF, Rgb};

/// Build a color from a `0xRRGGBB` value
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Check if the color leaves the LED dark
pub const fn is_off(color: Rgb) -> bool {
    color.r == OFF.r && color.g == OFF.g && color.b == OFF.b
}
