//! Primitive rasterization into a [`Canvas`](super::Canvas).
//!
//! - [`draw_line`]: integer error-accumulator line walk, endpoints inclusive
//! - [`fill_triangle`]: bounding-box scan with a barycentric inside test
//!
//! Neither primitive depth-tests; whatever is drawn last wins.

mod line;
mod triangle;

pub use line::{draw_line, line_pixels};
pub use triangle::{fill_triangle, triangle_contains, BoundingBox};
