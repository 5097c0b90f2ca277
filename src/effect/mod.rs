//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait.

mod fill_clear;
mod spinning;
mod tri_color;

pub use fill_clear::FillClearEffect;
pub use spinning::SpinningEffect;
pub use tri_color::TriColorEffect;

use crate::{buffer::PixelBuffer, color::Rgb};

const EFFECT_NAME_FILL_CLEAR: &str = "fill_clear";
const EFFECT_NAME_SPINNING: &str = "spinning";
const EFFECT_NAME_TRI_COLOR: &str = "tri_color";

const EFFECT_ID_FILL_CLEAR: u8 = 0;
const EFFECT_ID_SPINNING: u8 = 1;
const EFFECT_ID_TRI_COLOR: u8 = 2;

pub trait Effect {
    /// Sets if effect keeps changing after the first frame
    ///
    /// One-shot patterns are transmitted once and never re-rendered.
    const LOOPING: bool = true;

    /// Advance the effect by one tick
    fn tick<const N: usize>(&mut self, leds: &mut PixelBuffer<N>);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Lights the ring one LED at a time, then clears it
    FillClear(FillClearEffect),
    /// Single LED running around the ring
    Spinning(SpinningEffect),
    /// Static red/green/blue pattern
    TriColor(TriColorEffect),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    FillClear = EFFECT_ID_FILL_CLEAR,
    Spinning = EFFECT_ID_SPINNING,
    TriColor = EFFECT_ID_TRI_COLOR,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::FillClear(FillClearEffect::default())
    }
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_FILL_CLEAR => Self::FillClear,
            EFFECT_ID_SPINNING => Self::Spinning,
            EFFECT_ID_TRI_COLOR => Self::TriColor,
            _ => return None,
        })
    }

    /// Build the effect for this id
    ///
    /// `color` is ignored by effects with a fixed palette.
    pub fn to_slot(self, color: Rgb) -> EffectSlot {
        match self {
            Self::FillClear => EffectSlot::FillClear(FillClearEffect::new(color)),
            Self::Spinning => EffectSlot::Spinning(SpinningEffect::new(color)),
            Self::TriColor => EffectSlot::TriColor(TriColorEffect::default()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FillClear => EFFECT_NAME_FILL_CLEAR,
            Self::Spinning => EFFECT_NAME_SPINNING,
            Self::TriColor => EFFECT_NAME_TRI_COLOR,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_FILL_CLEAR => Some(Self::FillClear),
            EFFECT_NAME_SPINNING => Some(Self::Spinning),
            EFFECT_NAME_TRI_COLOR => Some(Self::TriColor),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Returns if effect has to be ticked after the first frame
    ///
    /// Derived from each effect's `Effect::LOOPING` constant.
    pub fn is_looping(&self) -> bool {
        match self {
            Self::FillClear(_) => FillClearEffect::LOOPING,
            Self::Spinning(_) => SpinningEffect::LOOPING,
            Self::TriColor(_) => TriColorEffect::LOOPING,
        }
    }

    /// Advance the current effect
    pub fn tick<const N: usize>(&mut self, leds: &mut PixelBuffer<N>) {
        match self {
            Self::FillClear(effect) => effect.tick(leds),
            Self::Spinning(effect) => effect.tick(leds),
            Self::TriColor(effect) => effect.tick(leds),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::FillClear(effect) => Effect::reset(effect),
            Self::Spinning(effect) => Effect::reset(effect),
            Self::TriColor(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::FillClear(_) => EffectId::FillClear,
            Self::Spinning(_) => EffectId::Spinning,
            Self::TriColor(_) => EffectId::TriColor,
        }
    }
}
