//! Frame scheduling and timing utilities.
//!
//! Provides deadline-based frame pacing for callers that own a clock.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::{Animator, OutputDriver};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Frame scheduler that paces an [`Animator`] against a clock.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Ticks the animator, which writes to the output driver
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(animator);
///
/// loop {
///     let result = scheduler.tick(Instant::now())?;
///     Timer::at(result.next_deadline).await;
/// }
/// ```
pub struct FrameScheduler<D: OutputDriver, const N: usize> {
    animator: Animator<D, N>,
    next_frame: Instant,
}

impl<D: OutputDriver, const N: usize> FrameScheduler<D, N> {
    /// Create a new frame scheduler.
    ///
    /// Frames are spaced by the animator's `frame_delay`.
    pub fn new(animator: Animator<D, N>) -> Self {
        Self {
            animator,
            next_frame: Instant::from_millis(0),
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Ticks the animator (effect step + write)
    /// 3. Returns the deadline for the next frame
    ///
    /// A failed write is returned as is and the deadline is left untouched.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, D::Error> {
        let frame_duration = self.animator.frame_delay();

        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift = Duration::from_millis(frame_duration.as_millis() * 2);
        let drifted = now > self.next_frame + max_drift;

        self.animator.tick()?;

        if drifted {
            self.next_frame = now;
        }
        self.next_frame += frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        Ok(FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    /// Get a reference to the animator.
    pub fn animator(&self) -> &Animator<D, N> {
        &self.animator
    }

    /// Get a mutable reference to the animator.
    pub fn animator_mut(&mut self) -> &mut Animator<D, N> {
        &mut self.animator
    }

    /// Release the animator.
    pub fn into_animator(self) -> Animator<D, N> {
        self.animator
    }
}
