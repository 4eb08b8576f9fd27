//! PNG output sink.
//!
//! Pure Rust PNG encoding using the `png` crate.

use super::{Frame, PresentationSink};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

fn write_png<W: Write>(writer: W, frame: &Frame<'_>) -> Result<()> {
    if frame.width() == 0 || frame.height() == 0 {
        return Err(Error::InvalidDimensions {
            width: frame.width(),
            height: frame.height(),
        });
    }

    let mut encoder = png::Encoder::new(writer, frame.width(), frame.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&frame.to_rgba_bytes())?;
    Ok(())
}

/// Encode a frame to PNG bytes.
///
/// # Errors
///
/// Returns an error for a zero-area frame or if PNG encoding fails.
pub fn encode_png(frame: &Frame<'_>) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(&mut buffer, frame)?;
    Ok(buffer)
}

/// Writes every presented frame to `<dir>/<prefix>_<NNNN>.png`.
#[derive(Debug, Clone)]
pub struct PngSink {
    dir: PathBuf,
    prefix: String,
    next_index: u32,
}

impl PngSink {
    /// Create a sink writing into `dir`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new<P: AsRef<Path>>(dir: P, prefix: &str) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        log::debug!("writing frames to {}", dir.display());
        Ok(Self {
            dir,
            prefix: prefix.to_string(),
            next_index: 0,
        })
    }

    /// Path the next frame will be written to.
    #[must_use]
    pub fn next_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}_{:04}.png", self.prefix, self.next_index))
    }

    /// Number of frames written so far.
    #[must_use]
    pub const fn frames_written(&self) -> u32 {
        self.next_index
    }
}

impl PresentationSink for PngSink {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        let path = self.next_path();
        let file = File::create(&path)?;
        write_png(BufWriter::new(file), frame)?;
        log::trace!("wrote {}", path.display());
        self.next_index += 1;
        Ok(())
    }
}
