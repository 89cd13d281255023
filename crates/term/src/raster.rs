//! Line rasterization into a [`PixelBuffer`].

use crate::core::ScreenPoint;
use crate::fb::PixelBuffer;

/// Plot the segment from `(x0, y0)` to `(x1, y1)` with integer Bresenham
/// stepping.
///
/// The result is 8-connected, includes both endpoints and plots at most
/// `max(|dx|, |dy|) + 1` points. Clipping is left to [`PixelBuffer::set_pixel`].
pub fn draw_line(fb: &mut PixelBuffer, mut x0: i32, mut y0: i32, x1: i32, y1: i32) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        fb.set_pixel(x0, y0);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw every edge between projected points.
///
/// Shared endpoints are drawn once per edge; overlapping dots are harmless.
pub fn draw_edges(fb: &mut PixelBuffer, points: &[ScreenPoint], edges: &[[usize; 2]]) {
    for &[a, b] in edges {
        let (x0, y0) = points[a].to_pixel();
        let (x1, y1) = points[b].to_pixel();
        draw_line(fb, x0, y0, x1, y1);
    }
}
