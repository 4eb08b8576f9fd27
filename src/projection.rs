//! Coordinate mapping from normalized clip-like space to screen space.
//!
//! Vertices are assumed to already be in `[-1, 1]` on x and y. Depth is
//! ignored for placement and only used for shading.

use crate::geometry::{ScreenPoint, Vec3};

/// Map a vertex to pixel coordinates for a `width x height` canvas.
///
/// `px = (x + 1) * width / 2`, `py = (y + 1) * height / 2`, truncated toward
/// zero. Values outside `[-1, 1]` land off-canvas; they are not clamped here.
///
/// # Example
///
/// ```
/// use tiny_raster::geometry::{ScreenPoint, Vec3};
/// use tiny_raster::projection::world_to_screen;
///
/// let p = world_to_screen(Vec3::new(0.0, 0.0, 0.7), 800, 600);
/// assert_eq!(p, ScreenPoint::new(400, 300));
/// ```
#[must_use]
pub fn world_to_screen(v: Vec3, width: u32, height: u32) -> ScreenPoint {
    ScreenPoint::new(
        ((v.x + 1.0) * f64::from(width) / 2.0) as i32,
        ((v.y + 1.0) * f64::from(height) / 2.0) as i32,
    )
}
