//! Startup, frame loop and shutdown
//!
//! Every resource is a local here or inside [`PlatformContext`], so it is
//! released on every exit path, including a failed startup.

use crate::assets::{Asset, Textures};
use crate::audio::AudioManager;
use crate::consts::FRAME_DELAY;
use crate::error::{StartupError, StartupResult};
use crate::platform::PlatformContext;
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, tick};

/// Run the game until the window is closed
pub fn run(settings: &Settings) -> StartupResult<()> {
    let mut platform = PlatformContext::init()?;

    let ttf = sdl2::ttf::init().map_err(|e| StartupError::Ttf(e.to_string()))?;

    let audio = AudioManager::init(settings)?;
    audio.start_music();

    let texture_creator = platform.canvas.texture_creator();
    let textures = Textures::load(&texture_creator)?;
    let skin_sizes = textures.skin_sizes();

    let font_path = Asset::Font.path();
    let font = ttf
        .load_font(font_path, settings.font_size)
        .map_err(|e| StartupError::asset(font_path, e))?;

    let renderer = Renderer::new(&texture_creator, textures, font);

    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut state = GameState::new(seed, skin_sizes);
    log::info!("Game initialized with seed: {}", state.seed);

    loop {
        let input = platform.poll_input();
        if input.quit {
            break;
        }

        tick(&mut state, &input);
        for event in state.drain_events() {
            if let GameEvent::EnemyDestroyed { score } = event {
                log::debug!("Enemy destroyed, score {}", score);
            }
            audio.handle_event(event);
        }

        renderer.render(&mut platform.canvas, &state);
        std::thread::sleep(FRAME_DELAY);
    }

    log::info!(
        "Shutting down after {} ticks (score {})",
        state.time_ticks,
        state.score
    );
    Ok(())
}
