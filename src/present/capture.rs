//! In-memory sink that keeps the last frame.

use super::{Frame, PresentationSink};
use crate::error::Result;

/// Keeps a copy of the most recent frame; useful headless and in tests.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    frames: u64,
}

impl CaptureSink {
    /// Create an empty capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames presented so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Width of the last frame.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the last frame.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixels of the last frame.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Packed pixel of the last frame, `None` when out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get((y as usize) * (self.width as usize) + (x as usize))
            .copied()
    }

    /// The last frame as a borrowed view.
    #[must_use]
    pub fn last_frame(&self) -> Frame<'_> {
        Frame::new(self.width, self.height, &self.pixels)
    }
}

impl PresentationSink for CaptureSink {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.width = frame.width();
        self.height = frame.height();
        self.pixels.clear();
        self.pixels.extend_from_slice(frame.pixels());
        self.frames += 1;
        Ok(())
    }
}
