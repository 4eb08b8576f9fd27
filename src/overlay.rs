//! Externally rendered overlay images (diagnostic text, HUDs).
//!
//! The rasterizer never draws into an overlay; it only composites one over
//! the canvas at the top-left corner when a frame is presented.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Owned straight-alpha ARGB8888 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Overlay {
    /// Wrap packed `0xAARRGGBB` pixels in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if `pixels.len() != width * height`.
    pub fn from_argb(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self> {
        let expected = (width as usize) * (height as usize);
        if pixels.len() != expected {
            return Err(Error::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Decode an 8-bit PNG (grey, grey+alpha, RGB or RGBA).
    pub fn from_png_reader<R: Read>(reader: R) -> Result<Self> {
        let mut decoder = png::Decoder::new(reader);
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
        let mut reader = decoder.read_info()?;

        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;
        let bytes = &buf[..info.buffer_size()];

        let channels = match info.color_type {
            png::ColorType::Grayscale => 1,
            png::ColorType::GrayscaleAlpha => 2,
            png::ColorType::Rgb => 3,
            png::ColorType::Rgba => 4,
            png::ColorType::Indexed => {
                return Err(Error::Presentation(
                    "indexed PNG was not expanded by the decoder".to_string(),
                ))
            }
        };

        let pixels = bytes
            .chunks_exact(channels)
            .map(|px| {
                let [r, g, b, a] = match *px {
                    [l] => [l, l, l, 255],
                    [l, a] => [l, l, l, a],
                    [r, g, b] => [r, g, b, 255],
                    [r, g, b, a] => [r, g, b, a],
                    _ => [0, 0, 0, 0],
                };
                u32::from_be_bytes([a, r, g, b])
            })
            .collect();

        Self::from_argb(info.width, info.height, pixels)
    }

    /// Decode PNG bytes held in memory.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_png_reader(bytes)
    }

    /// Load a PNG file.
    pub fn load_png<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_png_reader(BufReader::new(file))
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

    /// Get the packed pixel data.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Get a row of pixels.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u32]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.pixels[start..start + self.width as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_rgba(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn test_from_argb_checks_length() {
        assert!(Overlay::from_argb(2, 2, vec![0; 4]).is_ok());
        let err = Overlay::from_argb(2, 2, vec![0; 3]).unwrap_err();
        assert!(matches!(
            err,
            Error::PixelCountMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_row_access() {
        let overlay = Overlay::from_argb(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(overlay.row(1), Some(&[3, 4][..]));
        assert_eq!(overlay.row(2), None);
    }

    #[test]
    fn test_png_decode_rgba() {
        let png = encode_rgba(2, 1, &[10, 20, 30, 255, 1, 2, 3, 0]);
        let overlay = Overlay::from_png_bytes(&png).unwrap();

        assert_eq!(overlay.width(), 2);
        assert_eq!(overlay.height(), 1);
        assert_eq!(overlay.pixels(), &[0xFF0A_141E, 0x0001_0203]);
    }

    #[test]
    fn test_png_decode_garbage() {
        assert!(matches!(
            Overlay::from_png_bytes(b"not a png"),
            Err(Error::PngDecoding(_))
        ));
    }
}
