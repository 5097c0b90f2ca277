//! Entry points, one per named effect
//!
//! Each builds an [`Animator`] for an `N`-LED ring with the default frame delay
//! and runs it on the calling context.

use embedded_hal::delay::DelayNs;

use crate::animator::{Animator, AnimatorConfig, DEFAULT_FRAME_DELAY};
use crate::color::Rgb;
use crate::effect::EffectId;
use crate::stop::StopSignal;
use crate::OutputDriver;

fn run_effect<D: OutputDriver, T: DelayNs, const N: usize>(
    driver: D,
    effect: EffectId,
    color: Rgb,
    delay: &mut T,
    stop: &StopSignal,
) -> Result<D, D::Error> {
    let config = AnimatorConfig {
        effect,
        color,
        frame_delay: DEFAULT_FRAME_DELAY,
    };
    let mut animator = Animator::<D, N>::new(driver, &config);
    animator.run(delay, stop)?;
    Ok(animator.into_driver())
}

/// Slowly light each LED, wipe the ring once full, repeat until stopped
///
/// Returns the driver once `stop` is raised.
pub fn fill_and_clear<D: OutputDriver, T: DelayNs, const N: usize>(
    driver: D,
    color: Rgb,
    delay: &mut T,
    stop: &StopSignal,
) -> Result<D, D::Error> {
    run_effect::<D, T, N>(driver, EffectId::FillClear, color, delay, stop)
}

/// Spin a single LED around the ring until stopped
///
/// Returns the driver once `stop` is raised.
pub fn spinning<D: OutputDriver, T: DelayNs, const N: usize>(
    driver: D,
    color: Rgb,
    delay: &mut T,
    stop: &StopSignal,
) -> Result<D, D::Error> {
    run_effect::<D, T, N>(driver, EffectId::Spinning, color, delay, stop)
}

/// Show the static red/green/blue pattern
///
/// Writes a single frame and returns.
pub fn static_pattern<D: OutputDriver, const N: usize>(driver: D) -> Result<D, D::Error> {
    let config = AnimatorConfig {
        effect: EffectId::TriColor,
        ..AnimatorConfig::default()
    };
    let mut animator = Animator::<D, N>::new(driver, &config);
    animator.tick()?;
    Ok(animator.into_driver())
}
