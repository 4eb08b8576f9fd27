//! Triangle filling.
//!
//! Two interchangeable strategies fill a screen-space triangle with a flat
//! color:
//!
//! - **Scanline sweep**: sort the corners by row, split at the middle corner
//!   and fill horizontal spans between the long edge and the current short
//!   edge.
//! - **Barycentric bounding box**: test every pixel of the (clamped)
//!   bounding box against the triangle's barycentric weights.
//!
//! Both agree on well-formed triangles up to pixels along the edges, which
//! makes each a cross-check for the other. Neither ever fails: off-canvas
//! corners are clamped and zero-area triangles draw nothing (barycentric) or
//! a clamped sliver (sweep).

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::{BoundingBox, ScreenPoint};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weights returned for a degenerate triangle; they reject every pixel.
pub const DEGENERATE_WEIGHTS: [f64; 3] = [-1.0, 1.0, 1.0];

/// Triangle fill algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillStrategy {
    /// Row-by-row span filling.
    Scanline,
    /// Per-pixel barycentric inside test over the bounding box.
    #[default]
    Barycentric,
}

impl FillStrategy {
    /// Fill a triangle using this strategy.
    pub fn fill(self, canvas: &mut Canvas, corners: [ScreenPoint; 3], color: Color) {
        let [a, b, c] = corners;
        match self {
            Self::Scanline => fill_triangle_sweep(canvas, a, b, c, color),
            Self::Barycentric => fill_triangle_barycentric(canvas, a, b, c, color),
        }
    }
}

impl fmt::Display for FillStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scanline => f.write_str("scanline"),
            Self::Barycentric => f.write_str("barycentric"),
        }
    }
}

impl FromStr for FillStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scanline" | "sweep" => Ok(Self::Scanline),
            "barycentric" | "bbox" => Ok(Self::Barycentric),
            other => Err(format!("unknown fill strategy '{other}' (expected scanline or barycentric)")),
        }
    }
}

// ============================================================================
// Scanline sweep
// ============================================================================

#[inline]
fn lerp(a: i32, b: i32, t: f64) -> i32 {
    (f64::from(a) + t * f64::from(b - a)) as i32
}

/// Fill a triangle by sweeping horizontal spans.
///
/// Nothing is drawn unless at least one corner is on the canvas; the
/// corners are then clamped individually before sorting. Segment heights
/// count both end rows, so `h / height` never reaches 1 and no row is
/// skipped between the two halves.
pub fn fill_triangle_sweep(
    canvas: &mut Canvas,
    a: ScreenPoint,
    b: ScreenPoint,
    c: ScreenPoint,
    color: Color,
) {
    if !(canvas.contains_point(a) || canvas.contains_point(b) || canvas.contains_point(c)) {
        return;
    }

    let mut v = [canvas.clamp(a), canvas.clamp(b), canvas.clamp(c)];
    v.sort_by_key(|p| p.y);
    let [top, mid, bottom] = v;
    let packed = color.to_argb();

    let top_rows = mid.y - top.y + 1;
    let bottom_rows = bottom.y - mid.y + 1;
    let total_height = f64::from(bottom.y - top.y + 1);
    let top_height = f64::from(top_rows);
    let bottom_height = f64::from(bottom_rows);

    for h in 0..top_rows {
        let x0 = lerp(top.x, bottom.x, f64::from(h) / total_height);
        let x1 = lerp(top.x, mid.x, f64::from(h) / top_height);
        canvas.fill_span((top.y + h) as u32, x0 as u32, x1 as u32, packed);
    }

    for h in 0..bottom_rows {
        let x0 = lerp(top.x, bottom.x, f64::from(mid.y - top.y + h) / total_height);
        let x1 = lerp(mid.x, bottom.x, f64::from(h) / bottom_height);
        canvas.fill_span((mid.y + h) as u32, x0 as u32, x1 as u32, packed);
    }
}

// ============================================================================
// Barycentric bounding box
// ============================================================================

/// Barycentric weights of `p` relative to triangle `(a, b, c)`.
///
/// Returns `[wa, wb, wc]` with `wa + wb + wc = 1`; each corner evaluates to
/// its own unit weight. Triangles whose doubled signed area is below one
/// square pixel return [`DEGENERATE_WEIGHTS`].
///
/// Differences are taken in `f64`, so corners anywhere in the `i32` range
/// (e.g. saturated projections of far-off vertices) are safe.
#[must_use]
pub fn barycentric(a: ScreenPoint, b: ScreenPoint, c: ScreenPoint, p: ScreenPoint) -> [f64; 3] {
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let (bx, by) = (f64::from(b.x), f64::from(b.y));
    let (cx, cy) = (f64::from(c.x), f64::from(c.y));

    // (ab.x, ac.x, pa.x) x (ab.y, ac.y, pa.y)
    let (l1x, l1y, l1z) = (bx - ax, cx - ax, ax - f64::from(p.x));
    let (l2x, l2y, l2z) = (by - ay, cy - ay, ay - f64::from(p.y));
    let ux = l1y * l2z - l1z * l2y;
    let uy = l1z * l2x - l1x * l2z;
    let uz = l1x * l2y - l1y * l2x;

    if uz.abs() < 1.0 {
        return DEGENERATE_WEIGHTS;
    }

    [1.0 - (ux + uy) / uz, ux / uz, uy / uz]
}

/// Bounding box of a triangle clamped to the canvas.
///
/// Returns `None` when the canvas is empty or the box lies entirely off it.
#[must_use]
pub fn bounding_box(
    canvas: &Canvas,
    a: ScreenPoint,
    b: ScreenPoint,
    c: ScreenPoint,
) -> Option<BoundingBox> {
    if canvas.is_empty() {
        return None;
    }

    let bb = BoundingBox::of_triangle(a, b, c);
    let max_x = canvas.width() as i32 - 1;
    let max_y = canvas.height() as i32 - 1;
    if bb.max.x < 0 || bb.max.y < 0 || bb.min.x > max_x || bb.min.y > max_y {
        return None;
    }

    Some(BoundingBox {
        min: canvas.clamp(bb.min),
        max: canvas.clamp(bb.max),
    })
}

/// Fill a triangle by testing every pixel of its clamped bounding box.
///
/// A pixel is painted iff all three weights are `>= 0`, so pixels exactly on
/// an edge shared by two triangles are painted by both; the one drawn last
/// wins.
pub fn fill_triangle_barycentric(
    canvas: &mut Canvas,
    a: ScreenPoint,
    b: ScreenPoint,
    c: ScreenPoint,
    color: Color,
) {
    let Some(bb) = bounding_box(canvas, a, b, c) else {
        return;
    };
    let packed = color.to_argb();

    for y in bb.min.y..=bb.max.y {
        for x in bb.min.x..=bb.max.x {
            let [w0, w1, w2] = barycentric(a, b, c, ScreenPoint::new(x, y));
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }
            canvas.set_packed(x as u32, y as u32, packed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: i32, y: i32) -> ScreenPoint {
        ScreenPoint::new(x, y)
    }

    fn count(canvas: &Canvas) -> usize {
        canvas.pixels().iter().filter(|&&px| px != 0).count()
    }

    #[test]
    fn test_barycentric_corners() {
        let (a, b, c) = (p(10, 10), p(50, 20), p(20, 60));
        assert_eq!(barycentric(a, b, c, a), [1.0, 0.0, 0.0]);
        assert_eq!(barycentric(a, b, c, b), [0.0, 1.0, 0.0]);
        assert_eq!(barycentric(a, b, c, c), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_barycentric_sums_to_one() {
        let w = barycentric(p(0, 0), p(30, 0), p(0, 30), p(7, 11));
        assert_relative_eq!(w[0] + w[1] + w[2], 1.0, epsilon = 1e-12);
        assert_relative_eq!(w[1], 7.0 / 30.0, epsilon = 1e-12);
        assert_relative_eq!(w[2], 11.0 / 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_barycentric_outside() {
        let w = barycentric(p(0, 0), p(10, 0), p(0, 10), p(20, 20));
        assert!(w[0] < 0.0);
    }

    #[test]
    fn test_barycentric_degenerate() {
        assert_eq!(barycentric(p(5, 5), p(5, 5), p(5, 5), p(5, 5)), DEGENERATE_WEIGHTS);
        // Collinear
        assert_eq!(barycentric(p(0, 0), p(5, 5), p(10, 10), p(5, 5)), DEGENERATE_WEIGHTS);
    }

    #[test]
    fn test_barycentric_fill_right_triangle() {
        let mut canvas = Canvas::new(20, 20);
        fill_triangle_barycentric(&mut canvas, p(0, 0), p(9, 0), p(0, 9), Color::RED);

        // x + y <= 9 inside: 10 + 9 + ... + 1 = 55 pixels
        assert_eq!(count(&canvas), 55);
        assert_eq!(canvas.get_color(0, 9), Some(Color::RED));
        assert_eq!(canvas.get_color(9, 0), Some(Color::RED));
        assert_eq!(canvas.get(9, 1), Some(0));
    }

    #[test]
    fn test_barycentric_winding_independent() {
        let mut ccw = Canvas::new(40, 40);
        let mut cw = Canvas::new(40, 40);
        fill_triangle_barycentric(&mut ccw, p(3, 4), p(30, 9), p(12, 35), Color::WHITE);
        fill_triangle_barycentric(&mut cw, p(3, 4), p(12, 35), p(30, 9), Color::WHITE);
        assert_eq!(ccw, cw);
    }

    #[test]
    fn test_barycentric_degenerate_draws_nothing() {
        let mut canvas = Canvas::new(20, 20);
        fill_triangle_barycentric(&mut canvas, p(4, 4), p(4, 4), p(4, 4), Color::RED);
        fill_triangle_barycentric(&mut canvas, p(0, 0), p(5, 5), p(10, 10), Color::RED);
        assert_eq!(count(&canvas), 0);
    }

    #[test]
    fn test_barycentric_off_canvas_clamped() {
        let mut canvas = Canvas::new(10, 10);
        // Huge triangle covering the whole canvas
        fill_triangle_barycentric(&mut canvas, p(-100, -100), p(300, -100), p(-100, 300), Color::RED);
        assert_eq!(count(&canvas), 100);

        let mut canvas = Canvas::new(10, 10);
        fill_triangle_barycentric(&mut canvas, p(20, 20), p(30, 20), p(20, 30), Color::RED);
        assert_eq!(count(&canvas), 0);
    }

    #[test]
    fn test_barycentric_extreme_corners() {
        let mut canvas = Canvas::new(10, 10);
        fill_triangle_barycentric(&mut canvas, p(i32::MIN, 0), p(5, 5), p(0, 9), Color::RED);
        assert_eq!(canvas.get_color(1, 5), Some(Color::RED));

        let w = barycentric(p(i32::MIN, i32::MIN), p(i32::MAX, 0), p(0, i32::MAX), p(0, 0));
        assert!(w.iter().all(|x| x.is_finite()));
        assert_relative_eq!(w[0] + w[1] + w[2], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bounding_box_clamped() {
        let canvas = Canvas::new(800, 600);
        let bb = bounding_box(&canvas, p(-5, 10), p(900, 20), p(30, 700)).unwrap();
        assert_eq!(bb.min, p(0, 10));
        assert_eq!(bb.max, p(799, 599));
        assert!(bounding_box(&Canvas::new(0, 0), p(0, 0), p(1, 0), p(0, 1)).is_none());
    }

    #[test]
    fn test_shared_edge_painted_by_both() {
        // Two triangles sharing the diagonal (0,0)-(9,9)
        let mut first = Canvas::new(10, 10);
        let mut second = Canvas::new(10, 10);
        fill_triangle_barycentric(&mut first, p(0, 0), p(9, 0), p(9, 9), Color::RED);
        fill_triangle_barycentric(&mut second, p(0, 0), p(9, 9), p(0, 9), Color::BLUE);

        for i in 0..10 {
            assert_eq!(first.get_color(i, i), Some(Color::RED));
            assert_eq!(second.get_color(i, i), Some(Color::BLUE));
        }

        // Drawn into one canvas, the later triangle owns the diagonal
        let mut both = Canvas::new(10, 10);
        fill_triangle_barycentric(&mut both, p(0, 0), p(9, 0), p(9, 9), Color::RED);
        fill_triangle_barycentric(&mut both, p(0, 0), p(9, 9), p(0, 9), Color::BLUE);
        assert_eq!(both.get_color(5, 5), Some(Color::BLUE));
        assert_eq!(count(&both), 100);
    }

    #[test]
    fn test_sweep_right_triangle() {
        let mut canvas = Canvas::new(20, 20);
        fill_triangle_sweep(&mut canvas, p(0, 0), p(9, 0), p(0, 9), Color::RED);

        assert_eq!(canvas.get_color(0, 0), Some(Color::RED));
        assert_eq!(canvas.get_color(0, 9), Some(Color::RED));
        assert_eq!(canvas.get_color(3, 3), Some(Color::RED));
        // Nothing outside the bounding box
        for y in 0..20 {
            for x in 0..20 {
                if x > 9 || y > 9 {
                    assert_eq!(canvas.get(x, y), Some(0));
                }
            }
        }
    }

    #[test]
    fn test_sweep_covers_every_row() {
        let mut canvas = Canvas::new(64, 64);
        fill_triangle_sweep(&mut canvas, p(10, 5), p(50, 30), p(20, 58), Color::GREEN);

        for y in 5..=58 {
            let row_has_pixel = (0..64).any(|x| canvas.get(x, y) != Some(0));
            assert!(row_has_pixel, "row {y} left empty");
        }
        assert_eq!(canvas.get(30, 4), Some(0));
        assert_eq!(canvas.get(30, 59), Some(0));
    }

    #[test]
    fn test_sweep_vertex_order_irrelevant() {
        let corners = [p(10, 5), p(50, 30), p(20, 58)];
        let mut reference = Canvas::new(64, 64);
        fill_triangle_sweep(&mut reference, corners[0], corners[1], corners[2], Color::WHITE);

        for [i, j, k] in [[1, 0, 2], [2, 1, 0], [0, 2, 1], [1, 2, 0], [2, 0, 1]] {
            let mut canvas = Canvas::new(64, 64);
            fill_triangle_sweep(&mut canvas, corners[i], corners[j], corners[k], Color::WHITE);
            assert_eq!(canvas, reference);
        }
    }

    #[test]
    fn test_sweep_all_corners_off_canvas_is_noop() {
        let mut canvas = Canvas::new(10, 10);
        fill_triangle_sweep(&mut canvas, p(-100, -100), p(300, -100), p(-100, 300), Color::RED);
        assert_eq!(count(&canvas), 0);
    }

    #[test]
    fn test_sweep_degenerate_stays_bounded() {
        let mut canvas = Canvas::new(10, 10);
        fill_triangle_sweep(&mut canvas, p(4, 4), p(4, 4), p(4, 4), Color::RED);
        assert_eq!(count(&canvas), 1);

        let mut canvas = Canvas::new(10, 10);
        fill_triangle_sweep(&mut canvas, p(9, 9), p(9, 40), p(50, 9), Color::RED);
        assert_eq!(canvas.get_color(9, 9), Some(Color::RED));
    }

    #[test]
    fn test_strategy_dispatch_and_parse() {
        let corners = [p(2, 2), p(17, 4), p(8, 18)];
        let mut a = Canvas::new(20, 20);
        let mut b = Canvas::new(20, 20);
        FillStrategy::Barycentric.fill(&mut a, corners, Color::RED);
        fill_triangle_barycentric(&mut b, corners[0], corners[1], corners[2], Color::RED);
        assert_eq!(a, b);

        assert_eq!("scanline".parse::<FillStrategy>(), Ok(FillStrategy::Scanline));
        assert_eq!("Barycentric".parse::<FillStrategy>(), Ok(FillStrategy::Barycentric));
        assert!("wu".parse::<FillStrategy>().is_err());
        assert_eq!(FillStrategy::default(), FillStrategy::Barycentric);
        assert_eq!(FillStrategy::Scanline.to_string(), "scanline");
    }
}
