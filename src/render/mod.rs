//! Rasterization algorithms.
//!
//! All functions write straight into a [`Canvas`](crate::canvas::Canvas) and
//! are total: off-canvas and degenerate input is clamped or rejected rather
//! than reported.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer-only, 8-connected line drawing
//! - **Scanline sweep**: span filling between sorted triangle edges
//! - **Barycentric bounding box**: per-pixel inside test with a degenerate guard
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod line;
mod triangle;

pub use line::draw_line;
pub use triangle::{
    barycentric, bounding_box, fill_triangle_barycentric, fill_triangle_sweep, FillStrategy,
    DEGENERATE_WEIGHTS,
};
