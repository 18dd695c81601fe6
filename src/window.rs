//! Display collaborator: window creation, pixel upload and input polling.
//!
//! The frame loop only sees the [`Display`] trait. [`SdlContext`] and
//! [`Window`] implement it on top of SDL2; tests substitute a scripted fake.

use std::time::{Duration, Instant};

use log::debug;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::WindowContext;
use sdl2::EventPump;
use thiserror::Error;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const WINDOW_TITLE: &str = "tinyrast";
pub const FPS: u32 = 60;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("failed to initialize display: {0}")]
    Init(String),
    #[error("failed to present frame: {0}")]
    Present(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Num1,
    Num2,
    Other,
}

/// One input signal, as seen by the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// No pending input.
    None,
    CloseRequested,
    KeyPressed(Key),
    /// Some input the renderer does not react to.
    Other,
}

/// Surface the canvas is presented on.
pub trait Display {
    /// Take the next pending signal, or [`Signal::None`] once drained.
    fn poll_signal(&mut self) -> Signal;

    /// Copy a packed pixel buffer into the surface's backing storage.
    /// `pitch` is the length of one row in bytes.
    fn blit(&mut self, pixels: &[u8], pitch: usize) -> Result<(), DisplayError>;

    /// Flip the last blitted buffer onto the screen.
    fn present(&mut self) -> Result<(), DisplayError>;
}

/// Holds the frame interval and the time the last frame was due.
///
/// While frames finish early, each one is due exactly one interval after the
/// previous due time, so sleep overshoot does not accumulate. A frame that
/// overruns its slot is not made up for: the schedule restarts from the
/// moment the overrun was noticed.
pub struct FrameLimiter {
    frame_time: Duration,
    last_render: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            frame_time: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            last_render: now,
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// How long to sleep at `now` to hit the next due time. Advances the
    /// schedule by one frame.
    pub fn delay(&mut self, now: Instant) -> Duration {
        let target = self.last_render + self.frame_time;
        if now < target {
            self.last_render = target;
            target - now
        } else {
            debug!("Frame overran its slot by {:?}", now - target);
            self.last_render = now;
            Duration::ZERO
        }
    }

    /// Sleeps until the next frame is due.
    pub fn wait(&mut self) {
        let time_to_wait = self.delay(Instant::now());
        if !time_to_wait.is_zero() {
            std::thread::sleep(time_to_wait);
        }
    }
}

/// Owns the SDL context, the window's renderer and the event queue.
///
/// Dropping it releases everything SDL handed out, on every exit path.
pub struct SdlContext {
    canvas: Canvas<sdl2::video::Window>,
    texture_creator: TextureCreator<WindowContext>,
    event_pump: EventPump,
    width: u32,
    height: u32,
    _sdl: sdl2::Sdl,
}

impl SdlContext {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, DisplayError> {
        let sdl = sdl2::init().map_err(DisplayError::Init)?;
        let video_subsystem = sdl.video().map_err(DisplayError::Init)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| DisplayError::Init(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .target_texture()
            .build()
            .map_err(|e| DisplayError::Init(e.to_string()))?;
        let texture_creator = canvas.texture_creator();
        let event_pump = sdl.event_pump().map_err(DisplayError::Init)?;

        Ok(Self {
            canvas,
            texture_creator,
            event_pump,
            width,
            height,
            _sdl: sdl,
        })
    }

    /// Create the streaming texture frames are uploaded into.
    pub fn window(&mut self) -> Result<Window<'_>, DisplayError> {
        let texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::RGBA8888, self.width, self.height)
            .map_err(|e| DisplayError::Init(e.to_string()))?;

        Ok(Window {
            canvas: &mut self.canvas,
            event_pump: &mut self.event_pump,
            texture,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// A drawable window: the renderer plus a streaming texture of its size.
pub struct Window<'a> {
    canvas: &'a mut Canvas<sdl2::video::Window>,
    event_pump: &'a mut EventPump,
    texture: Texture<'a>,
}

impl Display for Window<'_> {
    fn poll_signal(&mut self) -> Signal {
        match self.event_pump.poll_event() {
            None => Signal::None,
            Some(Event::Quit { .. }) => Signal::CloseRequested,
            Some(Event::Window {
                win_event: sdl2::event::WindowEvent::Close,
                ..
            }) => Signal::CloseRequested,
            Some(Event::KeyDown { keycode, .. }) => Signal::KeyPressed(match keycode {
                Some(Keycode::Escape) => Key::Escape,
                Some(Keycode::Num1) => Key::Num1,
                Some(Keycode::Num2) => Key::Num2,
                _ => Key::Other,
            }),
            Some(_) => Signal::Other,
        }
    }

    fn blit(&mut self, pixels: &[u8], pitch: usize) -> Result<(), DisplayError> {
        self.texture
            .update(None, pixels, pitch)
            .map_err(|e| DisplayError::Present(e.to_string()))
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, None)
            .map_err(DisplayError::Present)?;
        self.canvas.present();
        Ok(())
    }
}
