//! Line rasterization.
//!
//! The error accumulator is kept scaled by the span of the driving axis, so
//! stepping needs only integer adds and no per-pixel division. The pixels
//! emitted are the ones a floating slope accumulator starting at
//! `slope - 1` would pick, without its rounding drift on long lines.

use crate::colors::Color;
use crate::math::vec2::Vec2;
use crate::render::canvas::Canvas;

/// Draw the segment between `p1` and `p2`, both endpoints included.
///
/// The segment is first clipped to the canvas, then points are snapped to the
/// pixel grid by flooring. A zero-length segment writes exactly one pixel.
/// Segments with a NaN or infinite endpoint are not drawn.
pub fn draw_line(canvas: &mut Canvas, p1: Vec2, p2: Vec2, color: Color) {
    let bounds = Vec2::new(canvas.width() as f64, canvas.height() as f64);
    let Some((p1, p2)) = clip_segment(p1, p2, bounds) else {
        return;
    };
    let (x1, y1) = snap(p1);
    let (x2, y2) = snap(p2);
    line_pixels(x1, y1, x2, y2, |x, y| canvas.put_pixel(x, y, color));
}

#[inline]
fn snap(p: Vec2) -> (i32, i32) {
    (p.x.floor() as i32, p.y.floor() as i32)
}

/// Liang-Barsky clip of `p1 -> p2` against `[0, max.x] x [0, max.y]`.
///
/// Endpoints already inside come back bit-identical, clipped ones are clamped
/// onto the rectangle. Returns `None` when the segment misses the rectangle or
/// its extent is not finite.
fn clip_segment(p1: Vec2, p2: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if !(dx.is_finite() && dy.is_finite()) {
        return None;
    }

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [(-dx, p1.x), (dx, max.x - p1.x), (-dy, p1.y), (dy, max.y - p1.y)] {
        if p == 0.0 {
            // Parallel to this edge.
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| {
        Vec2::new(
            (p1.x + t * dx).clamp(0.0, max.x),
            (p1.y + t * dy).clamp(0.0, max.y),
        )
    };
    let start = if t0 > 0.0 { at(t0) } else { p1 };
    let end = if t1 < 1.0 { at(t1) } else { p2 };
    Some((start, end))
}

/// Walk the pixels of the segment `(x1, y1) -> (x2, y2)`, calling `plot` for
/// each one in order of increasing driving-axis coordinate.
///
/// The set of pixels does not depend on endpoint order. Spans are widened to
/// `i64`, so any pair of `i32` endpoints is walked without overflow.
pub fn line_pixels<F>(x1: i32, y1: i32, x2: i32, y2: i32, mut plot: F)
where
    F: FnMut(i32, i32),
{
    let dx = i64::from(x1.abs_diff(x2));
    let dy = i64::from(y1.abs_diff(y2));

    if dy > dx {
        // Steep: y drives, x follows.
        let ((x1, y1), (x2, y2)) = ordered((x1, y1), (x2, y2), |p| p.1);
        walk(y1, y2, x1, x2, dy, dx, |y, x| plot(x, y));
    } else {
        let ((x1, y1), (x2, y2)) = ordered((x1, y1), (x2, y2), |p| p.0);
        walk(x1, x2, y1, y2, dx, dy, plot);
    }
}

fn ordered<K>(a: (i32, i32), b: (i32, i32), key: K) -> ((i32, i32), (i32, i32))
where
    K: Fn(&(i32, i32)) -> i32,
{
    if key(&b) < key(&a) {
        (b, a)
    } else {
        (a, b)
    }
}

/// Step `major` from `major_start` to `major_end` inclusive, advancing the
/// minor coordinate by one whenever the accumulated error turns non-negative.
///
/// `error` tracks `(slope - 1) + steps * slope - minor_steps` scaled by
/// `major_span`, which is zero only when the loop runs exactly once.
#[inline]
fn walk<F>(
    major_start: i32,
    major_end: i32,
    minor_start: i32,
    minor_end: i32,
    major_span: i64,
    minor_span: i64,
    mut plot: F,
) where
    F: FnMut(i32, i32),
{
    let minor_step = if minor_end < minor_start { -1 } else { 1 };
    let mut minor = minor_start;
    let mut error = minor_span - major_span;

    for major in major_start..=major_end {
        plot(major, minor);
        if error >= 0 {
            minor += minor_step;
            error -= major_span;
        }
        error += minor_span;
    }
}
