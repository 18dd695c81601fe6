//! The in-memory color buffer every primitive is drawn into.

use crate::colors::{self, Color, BYTES_PER_PIXEL};
use crate::window::{Display, DisplayError};

/// A fixed-size, row-major buffer of packed colors.
///
/// Sized once at construction to match the display surface and never
/// resized afterwards.
pub struct Canvas {
    color_buffer: Vec<Color>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            color_buffer: vec![colors::BACKGROUND; buffer_len(width, height)],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row of the buffer as uploaded to the display.
    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn clear(&mut self, color: Color) {
        self.color_buffer.fill(color);
    }

    /// Write one pixel. Coordinates outside the canvas are silently dropped.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.color_buffer[index] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|index| self.color_buffer[index])
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[Color] {
        &self.color_buffer
    }

    /// The buffer viewed as raw bytes, ready for a texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.color_buffer)
    }

    /// Upload the buffer to `display` and flip it. The only point where
    /// drawing becomes visible.
    pub fn present<D: Display>(&self, display: &mut D) -> Result<(), DisplayError> {
        display.blit(self.as_bytes(), self.pitch())?;
        display.present()
    }
}

/// Pixel count of a `width` x `height` buffer, computed in `usize`.
fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize
}
