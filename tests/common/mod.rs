#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use myrtio_ring_animator::{OutputDriver, Rgb, StopSignal};

/// Error returned by a scripted driver failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteError;

/// Driver that keeps a copy of every frame it was asked to write
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Rgb>>,
    /// Index of the write call that fails, counting from zero
    pub fail_at: Option<usize>,
    calls: usize,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(call: usize) -> Self {
        Self {
            fail_at: Some(call),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn last(&self) -> &[Rgb] {
        self.frames.last().expect("no frame written")
    }
}

impl OutputDriver for RecordingDriver {
    type Error = WriteError;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        let call = self.calls;
        self.calls += 1;
        if self.fail_at == Some(call) {
            return Err(WriteError);
        }
        self.frames.push(colors.to_vec());
        Ok(())
    }
}

/// Delay that returns immediately and counts the requested sleeps
///
/// Optionally raises a stop signal once a number of sleeps has been reached.
#[derive(Default)]
pub struct CountingDelay<'a> {
    pub sleeps: usize,
    pub slept_us: u64,
    pub stop_after: Option<(usize, &'a StopSignal)>,
}

impl<'a> CountingDelay<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stopping_after(sleeps: usize, stop: &'a StopSignal) -> Self {
        Self {
            stop_after: Some((sleeps, stop)),
            ..Self::default()
        }
    }
}

impl DelayNs for CountingDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.record(u64::from(ns) / 1_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.record(u64::from(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(u64::from(ms) * 1_000);
    }
}

impl CountingDelay<'_> {
    fn record(&mut self, us: u64) {
        self.sleeps += 1;
        self.slept_us += us;
        if let Some((limit, stop)) = self.stop_after {
            if self.sleeps >= limit {
                stop.raise();
            }
        }
    }
}
