//! Sampled frame timing.

use std::time::{Duration, Instant};

/// Times one frame out of every `report_every` and logs it.
///
/// Between samples [`FrameReporter::frame_time`] keeps returning the last
/// measurement, so per-frame animation driven by it advances at a steady
/// rate.
#[derive(Debug, Clone)]
pub struct FrameReporter {
    report_every: u32,
    tick: u32,
    started: Option<Instant>,
    frame_time: Duration,
}

impl FrameReporter {
    /// Sample once every `report_every` frames (at least every frame).
    #[must_use]
    pub fn new(report_every: u32) -> Self {
        Self {
            report_every: report_every.max(1),
            tick: 0,
            started: None,
            frame_time: Duration::ZERO,
        }
    }

    /// Mark the start of a frame.
    pub fn start_frame(&mut self) {
        self.tick += 1;
        if self.tick == self.report_every {
            self.started = Some(Instant::now());
        }
    }

    /// Mark the end of a frame; returns the measurement when this frame was
    /// sampled.
    pub fn end_frame(&mut self) -> Option<Duration> {
        if self.tick != self.report_every {
            return None;
        }
        self.tick = 0;
        let elapsed = self.started.take()?.elapsed();
        self.frame_time = elapsed;

        match self.fps() {
            Some(fps) => log::info!(
                "frame time: {:.2}ms, FPS: {fps:.0}",
                elapsed.as_secs_f64() * 1000.0
            ),
            None => log::info!("frame time: {:.2}ms", elapsed.as_secs_f64() * 1000.0),
        }
        Some(elapsed)
    }

    /// Last sampled frame time, zero before the first sample.
    #[must_use]
    pub const fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Frames per second implied by the last sample.
    #[must_use]
    pub fn fps(&self) -> Option<f64> {
        let secs = self.frame_time.as_secs_f64();
        (secs > 0.0).then(|| 1.0 / secs)
    }
}

impl Default for FrameReporter {
    fn default() -> Self {
        Self::new(15)
    }
}
