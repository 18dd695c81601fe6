//! Bounding-box triangle fill with a barycentric containment test.
//!
//! # Algorithm Overview
//!
//! 1. Compute the axis-aligned bounding box of the three screen-space points
//! 2. Visit every integer point in `[min, max)` on both axes
//! 3. Express the point in barycentric weights `(w1, w2)` relative to `A`:
//!
//! ```text
//! s1 = C.y - A.y      s2 = C.x - A.x
//! s3 = B.y - A.y      s4 = P.y - A.y
//!
//! w1 = (A.x * s1 + s4 * s2 - P.x * s1) / (s3 * s2 - (B.x - A.x) * s1)
//! w2 = (s4 - w1 * s3) / s1
//! ```
//!
//! 4. The point is covered when `w1 >= 0`, `w2 >= 0` and `w1 + w2 <= 1`,
//!    so edges and vertices count as inside.
//!
//! `w2` divides by `s1`, which is zero whenever `A` and `C` share a row even
//! for a perfectly good triangle. The vertices are rotated until `s1` is
//! non-zero; the covered region does not depend on which vertex plays `A`.
//! Only a zero-area triangle has no usable rotation, and it covers nothing.

use crate::colors::Color;
use crate::math::vec2::Vec2;
use crate::render::canvas::Canvas;

/// Smallest axis-aligned rectangle containing a set of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub top_left: Vec2,
    pub bottom_right: Vec2,
}

impl BoundingBox {
    /// Returns `None` for an empty point set.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let seed = Self {
            top_left: Vec2::new(f64::INFINITY, f64::INFINITY),
            bottom_right: Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        };
        Some(points.iter().fold(seed, |bbox, p| Self {
            top_left: Vec2::new(bbox.top_left.x.min(p.x), bbox.top_left.y.min(p.y)),
            bottom_right: Vec2::new(bbox.bottom_right.x.max(p.x), bbox.bottom_right.y.max(p.y)),
        }))
    }

    /// Integer columns covered by the half-open range `[min.x, max.x)`.
    pub fn columns(&self) -> std::ops::Range<i32> {
        self.top_left.x.ceil() as i32..self.bottom_right.x.ceil() as i32
    }

    /// Integer rows covered by the half-open range `[min.y, max.y)`.
    pub fn rows(&self) -> std::ops::Range<i32> {
        self.top_left.y.ceil() as i32..self.bottom_right.y.ceil() as i32
    }
}

/// Barycentric weights of `P` for one fixed vertex order.
///
/// `s1` and the `w1` denominator are both checked, so no NaN or infinity can
/// leak into the containment test.
struct Barycentric {
    a: Vec2,
    s1: f64,
    s2: f64,
    s3: f64,
    denominator: f64,
}

impl Barycentric {
    fn new(a: Vec2, b: Vec2, c: Vec2) -> Option<Self> {
        let s1 = c.y - a.y;
        let s2 = c.x - a.x;
        let s3 = b.y - a.y;
        let denominator = s3 * s2 - (b.x - a.x) * s1;

        if s1 == 0.0 || denominator == 0.0 {
            return None;
        }
        Some(Self {
            a,
            s1,
            s2,
            s3,
            denominator,
        })
    }

    /// Try each rotation of the vertex order until the weights are defined.
    fn for_triangle(a: Vec2, b: Vec2, c: Vec2) -> Option<Self> {
        Self::new(a, b, c)
            .or_else(|| Self::new(b, c, a))
            .or_else(|| Self::new(c, a, b))
    }

    #[inline]
    fn contains(&self, p: Vec2) -> bool {
        let s4 = p.y - self.a.y;
        let w1 = (self.a.x * self.s1 + s4 * self.s2 - p.x * self.s1) / self.denominator;
        let w2 = (s4 - w1 * self.s3) / self.s1;
        w1 >= 0.0 && w2 >= 0.0 && w1 + w2 <= 1.0
    }
}

/// Whether `p` lies inside or on the boundary of triangle `(a, b, c)`.
///
/// Always false for a zero-area triangle.
pub fn triangle_contains(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> bool {
    Barycentric::for_triangle(a, b, c).is_some_and(|weights| weights.contains(p))
}

/// Fill every pixel of the triangle's bounding box whose integer coordinate
/// passes the containment test. Later fills overwrite earlier ones.
pub fn fill_triangle(canvas: &mut Canvas, a: Vec2, b: Vec2, c: Vec2, color: Color) {
    let Some(weights) = Barycentric::for_triangle(a, b, c) else {
        return;
    };
    let Some(bbox) = BoundingBox::from_points(&[a, b, c]) else {
        return;
    };

    // Clip the scan to the canvas; put_pixel would drop the rest anyway.
    let columns = bbox.columns();
    let rows = bbox.rows();
    let min_x = columns.start.max(0);
    let max_x = columns.end.min(canvas.width() as i32);
    let min_y = rows.start.max(0);
    let max_y = rows.end.min(canvas.height() as i32);

    for y in min_y..max_y {
        for x in min_x..max_x {
            if weights.contains(Vec2::new(x as f64, y as f64)) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use approx::assert_relative_eq;

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    fn lit(canvas: &Canvas, color: Color) -> Vec<(i32, i32)> {
        let (w, h) = (canvas.width() as i32, canvas.height() as i32);
        (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.get_pixel(x, y) == Some(color))
            .collect()
    }

    #[test]
    fn test_bounding_box() {
        let bbox = BoundingBox::from_points(&[v(3.0, 4.0), v(-1.0, 7.0), v(5.0, -2.0)]).unwrap();
        assert_eq!(bbox.top_left, v(-1.0, -2.0));
        assert_eq!(bbox.bottom_right, v(5.0, 7.0));
        assert_eq!(bbox.columns(), -1..5);
        assert_eq!(bbox.rows(), -2..7);
    }

    #[test]
    fn test_bounding_box_away_from_origin() {
        let bbox = BoundingBox::from_points(&[v(100.5, 200.0), v(150.0, 250.25)]).unwrap();
        assert_relative_eq!(bbox.top_left.x, 100.5);
        assert_relative_eq!(bbox.top_left.y, 200.0);
        assert_relative_eq!(bbox.bottom_right.y, 250.25);
        assert!(BoundingBox::from_points(&[]).is_none());
    }

    #[test]
    fn test_containment() {
        let (a, b, c) = (v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0));
        assert!(triangle_contains(a, b, c, v(1.0, 1.0)));
        assert!(!triangle_contains(a, b, c, v(9.0, 9.0)));
        assert!(triangle_contains(a, b, c, v(0.0, 0.0)));
        assert!(triangle_contains(a, b, c, v(5.0, 5.0)));
        assert!(triangle_contains(a, b, c, v(10.0, 0.0)));
        assert!(!triangle_contains(a, b, c, v(-1.0, 0.0)));
    }

    #[test]
    fn test_containment_independent_of_winding() {
        let (a, b, c) = (v(2.0, 1.0), v(9.0, 4.0), v(3.0, 8.0));
        for y in 0..10 {
            for x in 0..10 {
                let p = v(x as f64, y as f64);
                let expected = triangle_contains(a, b, c, p);
                assert_eq!(triangle_contains(c, b, a, p), expected);
                assert_eq!(triangle_contains(b, c, a, p), expected);
            }
        }
    }

    #[test]
    fn test_shared_row_with_first_and_last_vertex() {
        // A and C on the same row: the naive w2 would divide by zero.
        let (a, b, c) = (v(0.0, 0.0), v(0.0, 10.0), v(10.0, 0.0));
        assert!(triangle_contains(a, b, c, v(1.0, 1.0)));
        assert!(triangle_contains(a, b, c, v(0.0, 0.0)));
        assert!(!triangle_contains(a, b, c, v(9.0, 9.0)));

        let mut canvas = Canvas::new(16, 16);
        fill_triangle(&mut canvas, a, b, c, colors::GREEN);
        assert!(!lit(&canvas, colors::GREEN).is_empty());
    }

    #[test]
    fn test_degenerate_fills_nothing() {
        let mut canvas = Canvas::new(16, 16);
        let before = canvas.pixels().to_vec();

        // Collinear points
        fill_triangle(&mut canvas, v(1.0, 1.0), v(5.0, 5.0), v(9.0, 9.0), colors::RED);
        // All on one row
        fill_triangle(&mut canvas, v(1.0, 3.0), v(5.0, 3.0), v(9.0, 3.0), colors::RED);
        // Single point
        fill_triangle(&mut canvas, v(4.0, 4.0), v(4.0, 4.0), v(4.0, 4.0), colors::RED);

        assert_eq!(canvas.pixels(), before.as_slice());
        assert!(!triangle_contains(v(1.0, 1.0), v(5.0, 5.0), v(9.0, 9.0), v(5.0, 5.0)));
    }

    #[test]
    fn test_fill_right_triangle() {
        let mut canvas = Canvas::new(20, 20);
        fill_triangle(&mut canvas, v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0), colors::BLUE);

        let pixels = lit(&canvas, colors::BLUE);
        // Half-open box: x and y in 0..10, keep x + y <= 10.
        let expected: Vec<(i32, i32)> = (0..10)
            .flat_map(|y| (0..10).map(move |x| (x, y)))
            .filter(|&(x, y)| x + y <= 10)
            .collect();
        assert_eq!(pixels, expected);
        assert_eq!(canvas.get_pixel(10, 0), Some(colors::BACKGROUND));
    }

    #[test]
    fn test_fill_clipped_to_canvas() {
        let mut canvas = Canvas::new(8, 8);
        fill_triangle(&mut canvas, v(-20.0, -20.0), v(40.0, -20.0), v(-20.0, 40.0), colors::WHITE);
        assert_eq!(lit(&canvas, colors::WHITE).len(), 64);
    }

    #[test]
    fn test_later_fill_overwrites() {
        let mut canvas = Canvas::new(12, 12);
        let (a, b, c) = (v(0.0, 0.0), v(10.0, 0.0), v(0.0, 10.0));
        fill_triangle(&mut canvas, a, b, c, colors::RED);
        fill_triangle(&mut canvas, a, b, c, colors::GREEN);
        assert!(lit(&canvas, colors::RED).is_empty());
        assert_eq!(canvas.get_pixel(1, 1), Some(colors::GREEN));
    }
}
