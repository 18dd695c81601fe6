//! Startup parameters.

use std::path::PathBuf;

use clap::Parser;

use crate::engine::RenderMode;
use crate::mesh::{ParseMode, DEFAULT_SCALE};
use crate::window::{FPS, WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Parser, Debug)]
#[command(author, version, about = "Software wireframe and fill rasterizer", long_about = None)]
pub struct Args {
    /// Path to the model file
    pub model: PathBuf,

    /// Width of the window in pixels
    #[arg(long, default_value_t = WINDOW_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Height of the window in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Target frame rate
    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Uniform scale applied to every vertex on load
    #[arg(long, default_value_t = DEFAULT_SCALE, allow_negative_numbers = true)]
    pub scale: f64,

    /// Initial render mode
    #[arg(long, value_enum, default_value_t = RenderMode::Wireframe)]
    pub mode: RenderMode,

    /// Reject malformed numbers in the model instead of reading them as zero
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

/// Resolved settings the application runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub model_path: PathBuf,
    pub scale: f64,
    pub render_mode: RenderMode,
    pub parse_mode: ParseMode,
}

impl Settings {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            fps: FPS,
            model_path: model_path.into(),
            scale: DEFAULT_SCALE,
            render_mode: RenderMode::default(),
            parse_mode: ParseMode::default(),
        }
    }
}

impl From<Args> for Settings {
    fn from(args: Args) -> Self {
        Self {
            width: args.width,
            height: args.height,
            fps: args.fps,
            model_path: args.model,
            scale: args.scale,
            render_mode: args.mode,
            parse_mode: if args.strict {
                ParseMode::Strict
            } else {
                ParseMode::Lenient
            },
        }
    }
}
