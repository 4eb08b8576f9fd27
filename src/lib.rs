//! # Tiny-Raster
//!
//! A small software rasterizer: lines, filled triangles and flat-shaded
//! meshes drawn into an in-memory ARGB canvas, handed once per frame to a
//! pluggable presentation sink.
//!
//! ## Features
//!
//! - **Pure Rust**: no GPU, the CPU writes every pixel
//! - **Two fill strategies**: scanline sweep and barycentric bounding box,
//!   interchangeable per call
//! - **Flat shading**: per-face intensity against a directional light, back
//!   faces culled
//! - **Headless or windowed**: capture frames in memory, write PNGs, or blit
//!   to a window with the `window` feature
//!
//! ## Quick Start
//!
//! ```rust
//! use tiny_raster::prelude::*;
//!
//! let mesh = Mesh::parse("v -1 -1 0\nv 1 -1 0\nv 0 1 0\nf 1 2 3\n")?;
//!
//! let mut rasterizer = Rasterizer::new(200, 150);
//! rasterizer.draw(&mesh);
//!
//! let mut sink = CaptureSink::new();
//! rasterizer.render(&mut sink)?;
//! assert_eq!(sink.frames(), 1);
//! # Ok::<(), tiny_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `window`: on-screen presentation through `minifb`

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in pixel code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Packed ARGB colors.
pub mod color;

/// Owned pixel canvas.
pub mod canvas;

/// Vectors, screen points and bounding boxes.
pub mod geometry;

/// Normalized coordinates to screen space.
pub mod projection;

/// Error types.
pub mod error;

// ============================================================================
// Rendering
// ============================================================================

/// Line and triangle rasterization.
pub mod render;

/// Meshes and the OBJ loader.
pub mod mesh;

/// The rasterizer facade.
pub mod rasterizer;

/// Overlay images composited at presentation.
pub mod overlay;

// ============================================================================
// Output
// ============================================================================

/// Presentation sinks.
pub mod present;

/// YAML configuration.
pub mod config;

/// Sampled frame timing.
pub mod timing;

pub use error::{Error, Result};

/// Prelude for convenient imports.
///
/// ```rust
/// use tiny_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Color;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{ScreenPoint, Vec3};
    pub use crate::mesh::{Geometry, Mesh};
    pub use crate::overlay::Overlay;
    #[cfg(feature = "window")]
    pub use crate::present::WindowSink;
    pub use crate::present::{CaptureSink, Dimensions, Frame, PngSink, PresentationSink};
    pub use crate::rasterizer::{Rasterizer, RenderMode};
    pub use crate::render::FillStrategy;
    pub use crate::timing::FrameReporter;
}

// ============================================================================
// Tests
// ============================================================================
