//! Color constants in RGBA8888 format (`0xRRGGBBAA`), matching the
//! streaming texture the window uploads into.

/// A packed 32-bit RGBA color.
pub type Color = u32;

/// Bytes occupied by one [`Color`] in the pixel buffer.
pub const BYTES_PER_PIXEL: usize = std::mem::size_of::<Color>();

pub const WHITE: Color = 0xFFFFFFFF;
pub const RED: Color = 0xFF0000FF;
pub const GREEN: Color = 0x00FF00FF;
pub const BLUE: Color = 0x0000FFFF;

pub const BACKGROUND: Color = 0x222222FF;
pub const WIREFRAME: Color = WHITE;
pub const FILL: Color = RED;
