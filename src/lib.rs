//! A CPU software rasterizer for line models.
//!
//! Geometry is loaded from a small text format, projected orthographically
//! and drawn into an in-memory color buffer as wireframe edges or filled
//! triangles. SDL2 is used only to show that buffer and to read input.
//!
//! # Quick Start
//!
//! ```ignore
//! use tinyrast::prelude::*;
//!
//! let settings = Settings::new("teapot.obj");
//! let mut sdl = SdlContext::new(WINDOW_TITLE, settings.width, settings.height)?;
//! let mesh = Mesh::load(&settings.model_path, settings.scale, settings.parse_mode)?;
//!
//! let mut engine = Engine::centered(settings.width, settings.height);
//! engine.add_mesh(mesh);
//!
//! let mut window = sdl.window()?;
//! App::new(&settings, engine).run(&mut window)?;
//! ```

pub mod app;
pub mod colors;
pub mod config;
pub mod engine;
pub mod math;
pub mod mesh;
pub mod render;
pub mod window;

pub use app::{App, State};
pub use config::{Args, Settings};
pub use engine::{Engine, RenderMode};
pub use mesh::{Face, LoadError, Mesh, Object, ParseMode};
pub use render::Canvas;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use tinyrast::prelude::*;
/// ```
pub mod prelude {
    // Frame loop
    pub use crate::app::{App, State};
    pub use crate::config::Settings;
    pub use crate::engine::{Engine, RenderMode};

    // Geometry
    pub use crate::math::{Vec2, Vec3};
    pub use crate::mesh::{Mesh, ParseMode};

    // Rendering
    pub use crate::render::{draw_line, fill_triangle, Canvas};

    // Window & Input
    pub use crate::window::{Display, FrameLimiter, Key, SdlContext, Signal, Window, WINDOW_TITLE};
}
