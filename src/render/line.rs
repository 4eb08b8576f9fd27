//! Integer line rasterization.

use crate::canvas::Canvas;
use crate::color::Color;

/// Draw a line with an integer Bresenham recurrence.
///
/// The line is 8-connected and paints exactly `max(|dx|, |dy|) + 1` pixels
/// once its endpoints are on the canvas.
///
/// If neither endpoint is on the canvas nothing is drawn; otherwise each
/// endpoint is clamped to the canvas independently. This is not a true clip
/// and bends a line whose far end is well outside the canvas.
pub fn draw_line(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    if !canvas.contains(x0, y0) && !canvas.contains(x1, y1) {
        return;
    }

    let max_x = canvas.width() as i32 - 1;
    let max_y = canvas.height() as i32 - 1;
    let (mut x0, mut y0) = (x0.clamp(0, max_x), y0.clamp(0, max_y));
    let (mut x1, mut y1) = (x1.clamp(0, max_x), y1.clamp(0, max_y));

    // Walk the dominant axis so consecutive pixels never leave a gap
    let steep = (x1 - x0).abs() < (y1 - y0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x1 < x0 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy2 = (y1 - y0).abs() * 2;
    let step = if y1 > y0 { 1 } else { -1 };
    let packed = color.to_argb();

    let mut error = 0;
    let mut y = y0;
    for x in x0..=x1 {
        if steep {
            canvas.set_packed(y as u32, x as u32, packed);
        } else {
            canvas.set_packed(x as u32, y as u32, packed);
        }

        error += dy2;
        if error > dx {
            y += step;
            error -= dx * 2;
        }
    }
}
