//! Presentation sinks: where finished frames go.
//!
//! The rasterizer never talks to a display. Once per frame it hands a
//! read-only [`Frame`] to a [`PresentationSink`], which may copy it to a
//! window, encode it to disk, or keep it for inspection.

mod capture;
mod png_sink;
#[cfg(feature = "window")]
mod window;

pub use capture::CaptureSink;
pub use png_sink::{encode_png, PngSink};
#[cfg(feature = "window")]
pub use window::WindowSink;

use crate::canvas::{pixels_to_argb_bytes, pixels_to_rgba_bytes};
use crate::error::Result;

/// Read-only view of a finished frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    width: u32,
    height: u32,
    pixels: &'a [u32],
}

impl<'a> Frame<'a> {
    /// Wrap packed ARGB pixels; `pixels.len()` must be `width * height`.
    #[must_use]
    pub fn new(width: u32, height: u32, pixels: &'a [u32]) -> Self {
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Packed `0xAARRGGBB` pixels, row-major.
    #[must_use]
    pub const fn pixels(&self) -> &'a [u32] {
        self.pixels
    }

    /// Bytes in A, R, G, B order, 4 per pixel.
    #[must_use]
    pub fn to_argb_bytes(&self) -> Vec<u8> {
        pixels_to_argb_bytes(self.pixels)
    }

    /// Bytes in R, G, B, A order, 4 per pixel.
    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        pixels_to_rgba_bytes(self.pixels)
    }
}

/// Receives each finished frame.
pub trait PresentationSink {
    /// Display, store or forward one frame.
    ///
    /// The frame borrows the canvas; implementations must copy what they
    /// want to keep.
    fn present(&mut self, frame: &Frame<'_>) -> Result<()>;
}

/// Surface size at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Smallest surface a window may be shrunk to.
    pub const MIN_WINDOW: Self = Self::new(50, 50);

    /// Create new dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Grow each side to at least [`Dimensions::MIN_WINDOW`].
    #[must_use]
    pub fn at_least_min(self) -> Self {
        Self::new(
            self.width.max(Self::MIN_WINDOW.width),
            self.height.max(Self::MIN_WINDOW.height),
        )
    }
}
