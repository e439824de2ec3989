//! Audio system using SDL2_mixer
//!
//! Looping background music plus two one-shot cues. The simulation never
//! plays sounds itself; the app forwards each [`GameEvent`] here.

use sdl2::mixer::{self, Channel, Chunk, InitFlag, Music, Sdl2MixerContext};

use crate::assets::Asset;
use crate::error::{StartupError, StartupResult};
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Output device parameters
const FREQUENCY: i32 = 44_100;
const CHUNK_SIZE: i32 = 2048;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fired
    Laser,
    /// Player was hit
    GameOver,
}

/// What the music track should do in response to an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicCommand {
    Keep,
    Halt,
    Restart,
}

/// Audio response to a simulation event
pub fn response_to(event: GameEvent) -> (MusicCommand, Option<SoundEffect>) {
    match event {
        GameEvent::BulletFired => (MusicCommand::Keep, Some(SoundEffect::Laser)),
        GameEvent::EnemyDestroyed { .. } => (MusicCommand::Keep, None),
        GameEvent::GameOver { .. } => (MusicCommand::Halt, Some(SoundEffect::GameOver)),
        GameEvent::Restarted => (MusicCommand::Restart, None),
    }
}

/// Map a 0.0 - 1.0 volume onto the mixer's integer scale
pub fn mixer_volume(vol: f32) -> i32 {
    (vol.clamp(0.0, 1.0) * mixer::MAX_VOLUME as f32) as i32
}

/// Open audio device; closed again on drop
struct AudioDevice;

impl AudioDevice {
    fn open() -> StartupResult<Self> {
        mixer::open_audio(
            FREQUENCY,
            mixer::DEFAULT_FORMAT,
            mixer::DEFAULT_CHANNELS,
            CHUNK_SIZE,
        )
        .map_err(StartupError::Mixer)?;
        Ok(Self)
    }
}

impl Drop for AudioDevice {
    fn drop(&mut self) {
        mixer::close_audio();
        log::debug!("Audio device closed");
    }
}

/// Audio manager for the game
///
/// Field order matters: music and chunks are freed before the device
/// closes, and the device closes before the mixer shuts down.
pub struct AudioManager {
    music: Music<'static>,
    laser: Chunk,
    game_over: Chunk,
    _device: AudioDevice,
    _mixer: Sdl2MixerContext,
}

impl AudioManager {
    /// Open the device and load music and sound effects
    pub fn init(settings: &Settings) -> StartupResult<Self> {
        let mixer_ctx = mixer::init(InitFlag::MP3).map_err(StartupError::Mixer)?;
        let device = AudioDevice::open()?;

        let music = Music::from_file(Asset::Music.path())
            .map_err(|e| StartupError::asset(Asset::Music.path(), e))?;
        let mut laser = load_chunk(Asset::LaserSound)?;
        let mut game_over = load_chunk(Asset::GameOverSound)?;

        Music::set_volume(mixer_volume(settings.effective_music_volume()));
        let sfx = mixer_volume(settings.effective_sfx_volume());
        laser.set_volume(sfx);
        game_over.set_volume(sfx);
        log::info!("Audio ready ({} Hz)", FREQUENCY);

        Ok(Self {
            music,
            laser,
            game_over,
            _device: device,
            _mixer: mixer_ctx,
        })
    }

    /// Start the background track from the top, looping forever
    pub fn start_music(&self) {
        if let Err(e) = self.music.play(-1) {
            log::warn!("Failed to play music: {}", e);
        }
    }

    pub fn halt_music(&self) {
        Music::halt();
    }

    /// Play a sound effect on any free channel
    pub fn play(&self, effect: SoundEffect) {
        let chunk = match effect {
            SoundEffect::Laser => &self.laser,
            SoundEffect::GameOver => &self.game_over,
        };
        // No free channel just drops the cue
        if let Err(e) = Channel::all().play(chunk, 0) {
            log::debug!("Dropped {:?} cue: {}", effect, e);
        }
    }

    /// React to a simulation event
    pub fn handle_event(&self, event: GameEvent) {
        let (music, effect) = response_to(event);
        match music {
            MusicCommand::Keep => {}
            MusicCommand::Halt => self.halt_music(),
            MusicCommand::Restart => self.start_music(),
        }
        if let Some(effect) = effect {
            self.play(effect);
        }
    }
}

fn load_chunk(asset: Asset) -> StartupResult<Chunk> {
    let path = asset.path();
    let chunk = Chunk::from_file(path).map_err(|e| StartupError::asset(path, e))?;
    log::debug!("Loaded sound {}", path);
    Ok(chunk)
}
