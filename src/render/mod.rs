//! Low-level rendering: the pixel canvas and the primitives drawn into it.

pub mod canvas;
pub mod rasterizer;

pub use canvas::Canvas;
pub use rasterizer::{draw_line, fill_triangle, line_pixels, triangle_contains, BoundingBox};
