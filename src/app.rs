//! The frame loop.
//!
//! [`App`] owns the canvas and the scene and drives them against a
//! [`Display`]: clear, poll input, draw, wait out the frame, present. It is
//! single threaded; the only blocking point is the pacing sleep.

use std::time::Instant;

use log::info;

use crate::colors;
use crate::config::Settings;
use crate::engine::{Engine, RenderMode};
use crate::render::Canvas;
use crate::window::{Display, DisplayError, FrameLimiter, Key, Signal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    /// Terminal. Reached on a close request or Escape.
    Stopped,
}

pub struct App {
    canvas: Canvas,
    engine: Engine,
    limiter: FrameLimiter,
    state: State,
}

impl App {
    pub fn new(settings: &Settings, engine: Engine) -> Self {
        Self {
            canvas: Canvas::new(settings.width, settings.height),
            engine,
            limiter: FrameLimiter::new(settings.fps, Instant::now()),
            state: State::Running,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Run frames until the loop stops.
    pub fn run<D: Display>(&mut self, display: &mut D) -> Result<(), DisplayError> {
        info!(
            "Running at {:?} per frame in {} mode",
            self.limiter.frame_time(),
            self.engine.render_mode()
        );
        while self.tick(display)? == State::Running {}
        info!("Stopped");
        Ok(())
    }

    /// Run one frame. Nothing is drawn or presented once a quit signal
    /// arrives.
    pub fn tick<D: Display>(&mut self, display: &mut D) -> Result<State, DisplayError> {
        if self.state == State::Stopped {
            return Ok(State::Stopped);
        }

        self.canvas.clear(colors::BACKGROUND);

        self.process_input(display);
        if self.state == State::Stopped {
            return Ok(State::Stopped);
        }

        self.engine.render(&mut self.canvas);
        self.limiter.wait();
        self.canvas.present(display)?;

        Ok(self.state)
    }

    fn process_input<D: Display>(&mut self, display: &mut D) {
        loop {
            match display.poll_signal() {
                Signal::None => break,
                Signal::CloseRequested | Signal::KeyPressed(Key::Escape) => {
                    self.state = State::Stopped;
                }
                Signal::KeyPressed(Key::Num1) => self.set_render_mode(RenderMode::Wireframe),
                Signal::KeyPressed(Key::Num2) => self.set_render_mode(RenderMode::Filled),
                Signal::KeyPressed(Key::Other) | Signal::Other => {}
            }
        }
    }

    fn set_render_mode(&mut self, mode: RenderMode) {
        if self.engine.render_mode() != mode {
            info!("Render mode: {mode}");
            self.engine.set_render_mode(mode);
        }
    }
}
