//! Canvas buffer: the single mutable pixel surface every draw call writes into.
//!
//! Pixels are packed `0xAARRGGBB` values stored row-major, so the pixel at
//! `(x, y)` lives at index `y * width + x`. The buffer length always equals
//! `width * height`; a zero-area canvas is valid and simply has no
//! addressable pixels.

use crate::color::{blend_over, Color};
use crate::geometry::ScreenPoint;
use crate::overlay::Overlay;

/// Owned, resizable 2D array of packed ARGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Packed ARGB pixels in row-major order.
    pixels: Vec<u32>,
}

impl Canvas {
    /// Create a zero-filled canvas.
    ///
    /// Either dimension may be zero, which yields an empty canvas on which
    /// every draw is a no-op.
    ///
    /// # Example
    ///
    /// ```
    /// use tiny_raster::canvas::Canvas;
    ///
    /// let canvas = Canvas::new(800, 600);
    /// assert_eq!(canvas.width(), 800);
    /// assert_eq!(canvas.pixels().len(), 800 * 600);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize)],
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

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether the canvas has no addressable pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the packed pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Reallocate the backing storage to exactly `width * height` pixels.
    ///
    /// Prior contents are discarded; the new buffer is zero-filled.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; self.pixel_count()];
        log::debug!("canvas reallocated to {width}x{height}");
    }

    /// Write one pixel.
    ///
    /// This is the rasterizers' hot path and performs no clipping: callers
    /// must guarantee `x < width` and `y < height`. Violating that writes a
    /// wrong pixel or panics on the slice index.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.set_packed(x, y, color.to_argb());
    }

    /// Write one already-packed pixel. Same precondition as [`Canvas::set`].
    #[inline]
    pub fn set_packed(&mut self, x: u32, y: u32, packed: u32) {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) off canvas");
        let idx = self.index(x, y);
        self.pixels[idx] = packed;
    }

    /// Fill the inclusive span `x0..=x1` of row `y`. Same precondition as
    /// [`Canvas::set`] for both ends.
    #[inline]
    pub fn fill_span(&mut self, y: u32, x0: u32, x1: u32, packed: u32) {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let start = self.index(lo, y);
        let end = self.index(hi, y);
        self.pixels[start..=end].fill(packed);
    }

    /// Get the packed value at a pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Get the color at a pixel coordinate.
    #[must_use]
    pub fn get_color(&self, x: u32, y: u32) -> Option<Color> {
        self.get(x, y).map(Color::from_argb)
    }

    /// Fill every pixel with a color.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_argb());
    }

    /// Whether a signed screen coordinate addresses a pixel.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Whether a screen point addresses a pixel.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, p: ScreenPoint) -> bool {
        self.contains(p.x, p.y)
    }

    /// Clamp a point to `[0, width-1] x [0, height-1]`.
    ///
    /// On an empty canvas the result is not addressable; callers check
    /// [`Canvas::is_empty`] first.
    #[must_use]
    pub fn clamp(&self, p: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(
            p.x.min(self.max_x()).max(0),
            p.y.min(self.max_y()).max(0),
        )
    }

    /// Blend an overlay over the canvas with its top-left corner at `(0, 0)`.
    ///
    /// The overlay keeps its native size and is clipped to the canvas.
    pub fn composite(&mut self, overlay: &Overlay) {
        let cols = overlay.width().min(self.width) as usize;
        let rows = overlay.height().min(self.height);

        for y in 0..rows {
            let Some(src) = overlay.row(y) else { break };
            let start = self.index(0, y);
            let dst = &mut self.pixels[start..start + cols];
            for (d, &s) in dst.iter_mut().zip(&src[..cols]) {
                *d = blend_over(s, *d);
            }
        }
    }

    /// Pixel data as bytes in A, R, G, B order (alpha first), row-major and
    /// tightly packed, for surfaces expecting ARGB8888 most-significant
    /// byte first.
    #[must_use]
    pub fn to_argb_bytes(&self) -> Vec<u8> {
        pixels_to_argb_bytes(&self.pixels)
    }

    /// Pixel data as bytes in R, G, B, A order, for PNG encoding.
    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        pixels_to_rgba_bytes(&self.pixels)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    #[inline]
    fn max_x(&self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX) - 1
    }

    #[inline]
    fn max_y(&self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX) - 1
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

pub(crate) fn pixels_to_argb_bytes(pixels: &[u32]) -> Vec<u8> {
    pixels.iter().flat_map(|p| p.to_be_bytes()).collect()
}

pub(crate) fn pixels_to_rgba_bytes(pixels: &[u32]) -> Vec<u8> {
    pixels
        .iter()
        .flat_map(|&p| {
            let [a, r, g, b] = p.to_be_bytes();
            [r, g, b, a]
        })
        .collect()
}
