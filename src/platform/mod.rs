//! Platform abstraction layer
//!
//! Owns the SDL2 handles the game needs for its whole lifetime:
//! - Window and accelerated canvas
//! - Event pump (quit signal, key presses, held keys)
//! - Image decoding context
//!
//! Everything is released by `Drop` in field order, so an early return
//! during startup cleans up whatever was already created.

use sdl2::event::Event;
use sdl2::image::{InitFlag, Sdl2ImageContext};
use sdl2::keyboard::{KeyboardState, Scancode};
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::{AudioSubsystem, EventPump, Sdl, VideoSubsystem};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::error::{StartupError, StartupResult};
use crate::sim::TickInput;

/// Key that fires (or restarts from the game over screen)
pub const FIRE_KEY: Scancode = Scancode::Space;
/// Held movement keys
pub const LEFT_KEY: Scancode = Scancode::A;
pub const RIGHT_KEY: Scancode = Scancode::D;
pub const UP_KEY: Scancode = Scancode::W;
pub const DOWN_KEY: Scancode = Scancode::S;

/// SDL handles owned for the lifetime of the game
pub struct PlatformContext {
    pub canvas: Canvas<Window>,
    event_pump: EventPump,
    _image: Sdl2ImageContext,
    _audio: AudioSubsystem,
    _video: VideoSubsystem,
    _sdl: Sdl,
}

impl PlatformContext {
    /// Bring up SDL, open the window and create the canvas
    pub fn init() -> StartupResult<Self> {
        let sdl = sdl2::init().map_err(StartupError::Sdl)?;
        let video = sdl.video().map_err(StartupError::Sdl)?;
        let audio = sdl.audio().map_err(StartupError::Sdl)?;
        log::debug!("SDL video and audio subsystems ready");

        let window = video
            .window(WINDOW_TITLE, SCREEN_WIDTH, SCREEN_HEIGHT)
            .position_centered()
            .build()
            .map_err(|e| StartupError::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| StartupError::Canvas(e.to_string()))?;
        log::info!("Created {}x{} window", SCREEN_WIDTH, SCREEN_HEIGHT);

        let image = sdl2::image::init(InitFlag::PNG).map_err(StartupError::Image)?;
        let event_pump = sdl.event_pump().map_err(StartupError::Sdl)?;

        Ok(Self {
            canvas,
            event_pump,
            _image: image,
            _audio: audio,
            _video: video,
            _sdl: sdl,
        })
    }

    /// Drain pending events and sample held keys into one tick of input
    pub fn poll_input(&mut self) -> TickInput {
        let mut input = TickInput::default();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => input.quit = true,
                Event::KeyDown {
                    scancode: Some(code),
                    ..
                } if code == FIRE_KEY => input.fire += 1,
                _ => {}
            }
        }

        sample_held_keys(&self.event_pump.keyboard_state(), &mut input);
        input
    }
}

fn sample_held_keys(keys: &KeyboardState, input: &mut TickInput) {
    input.left = keys.is_scancode_pressed(LEFT_KEY);
    input.right = keys.is_scancode_pressed(RIGHT_KEY);
    input.up = keys.is_scancode_pressed(UP_KEY);
    input.down = keys.is_scancode_pressed(DOWN_KEY);
}
