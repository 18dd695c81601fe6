use std::process::ExitCode;

use clap::Parser;
use log::error;
use thiserror::Error;

use tinyrast::mesh::Mesh;
use tinyrast::window::{DisplayError, SdlContext, WINDOW_TITLE};
use tinyrast::{App, Args, Engine, LoadError, Settings};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Display(#[from] DisplayError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

fn run(settings: &Settings) -> Result<(), AppError> {
    // Dropped on every return below, so SDL is always shut down.
    let mut sdl = SdlContext::new(WINDOW_TITLE, settings.width, settings.height)?;

    let mesh = Mesh::load(&settings.model_path, settings.scale, settings.parse_mode)?;
    let mut engine = Engine::centered(sdl.width(), sdl.height());
    engine.add_mesh(mesh);
    engine.set_render_mode(settings.render_mode);

    let mut window = sdl.window()?;
    App::new(settings, engine).run(&mut window)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from(Args::parse());
    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
