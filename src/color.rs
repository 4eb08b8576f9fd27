//! Color type and ARGB8888 packing.
//!
//! Colors carry three 8-bit channels; alpha is implicit and always opaque.
//! The packed layout puts alpha in the most significant byte:
//!
//! ```text
//! 0xAARRGGBB = 0xFF000000 | (r << 16) | (g << 8) | b
//! ```
//!
//! which is what an 8-8-8-8 ARGB presentation surface expects.

use serde::{Deserialize, Serialize};

/// Opaque alpha in packed position.
pub const OPAQUE_ALPHA: u32 = 0xFF00_0000;

/// RGB color with 8-bit components and implicit full opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Red.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green, the wireframe default.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Blue.
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Create a new color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Greyscale color for a light intensity in `[0, 1]`.
    ///
    /// Each channel is `round(intensity * 255)`; out-of-range intensities
    /// saturate.
    #[must_use]
    pub fn grey(intensity: f64) -> Self {
        let v = (intensity * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(v, v, v)
    }

    /// Pack into `0xAARRGGBB` with opaque alpha.
    #[inline]
    #[must_use]
    pub const fn to_argb(self) -> u32 {
        OPAQUE_ALPHA | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpack from `0xAARRGGBB`, discarding alpha.
    #[must_use]
    pub const fn from_argb(packed: u32) -> Self {
        Self::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_argb()
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Blend a straight-alpha ARGB source pixel over an opaque destination.
///
/// Uses source-over compositing; the result is always opaque.
#[must_use]
pub fn blend_over(src: u32, dst: u32) -> u32 {
    let alpha = src >> 24;
    match alpha {
        0 => dst,
        255 => src,
        _ => {
            let inv = 255 - alpha;
            let mix = |shift: u32| -> u32 {
                let s = (src >> shift) & 0xFF;
                let d = (dst >> shift) & 0xFF;
                // Rounded division by 255
                let v = s * alpha + d * inv;
                ((v + 127) / 255) << shift
            };
            OPAQUE_ALPHA | mix(16) | mix(8) | mix(0)
        }
    }
}
