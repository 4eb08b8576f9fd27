//! Error types for tiny-raster operations.
//!
//! Drawing itself never fails: off-canvas and degenerate geometry is absorbed
//! by clamping or rejection. Errors only come from acquiring resources
//! (meshes, overlays, sinks, configuration) and from presenting frames.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tiny-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// PNG decoding error.
    #[error("PNG decoding error: {0}")]
    PngDecoding(#[from] png::DecodingError),

    /// Invalid dimensions for a presentation surface or image.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Pixel data does not match the declared image size.
    #[error("Pixel count mismatch: expected {expected} pixels, got {actual}")]
    PixelCountMismatch {
        /// Pixels implied by width x height.
        expected: usize,
        /// Pixels actually supplied.
        actual: usize,
    },

    /// Malformed mesh source.
    #[error("mesh parse error at line {line}: {message}")]
    MeshParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index (0-based).
        index: usize,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// The presentation surface could not be created or updated.
    #[error("Presentation error: {0}")]
    Presentation(String),
}
