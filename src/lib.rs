//! Space Shooter - dodge and blast falling meteors
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `platform`: SDL2 window, canvas and input ownership
//! - `assets`: Texture loading
//! - `audio`: Music and sound cues via SDL2_mixer
//! - `renderer`: Draws the simulation state onto the canvas
//! - `settings`: Tunable runtime settings
//! - `app`: Startup, frame loop and shutdown

pub mod app;
pub mod assets;
pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::StartupError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Window title
    pub const WINDOW_TITLE: &str = "Space Shooter";
    /// Window dimensions (pixels)
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;

    /// Sleep between frames (~60 Hz). Movement is per frame, not per second.
    pub const FRAME_DELAY: Duration = Duration::from_millis(16);

    /// Player box at session start
    pub const PLAYER_START_X: i32 = 300;
    pub const PLAYER_START_Y: i32 = 400;
    pub const PLAYER_SIZE: i32 = 50;
    /// Pixels moved per held direction key per tick
    pub const PLAYER_SPEED: i32 = 5;
    /// Player clamp bounds (half the ship may leave the screen sideways)
    pub const PLAYER_MIN_X: i32 = -25;
    pub const PLAYER_MAX_X: i32 = 775;
    pub const PLAYER_MIN_Y: i32 = 0;
    pub const PLAYER_MAX_Y: i32 = 550;

    /// Bullet box dimensions
    pub const BULLET_WIDTH: i32 = 4;
    pub const BULLET_HEIGHT: i32 = 10;
    /// Upward bullet speed (pixels per tick)
    pub const BULLET_SPEED: i32 = 7;

    /// Ticks between enemy spawns (spawns when the timer exceeds this)
    pub const SPAWN_INTERVAL_TICKS: u32 = 40;
    /// Enemy spawn row, just above the screen
    pub const ENEMY_SPAWN_Y: f32 = -50.0;
    /// Enemy spawn column range (inclusive)
    pub const ENEMY_SPAWN_MAX_X: i32 = 800;
    /// Enemies are removed once they fall past this row
    pub const ENEMY_DESPAWN_Y: f32 = 620.0;
    /// Enemy scale range [min, max)
    pub const ENEMY_MIN_SCALE: f32 = 0.5;
    pub const ENEMY_MAX_SCALE: f32 = 1.5;
    /// Enemy fall speed range [min, max) in pixels per tick
    pub const ENEMY_MIN_SPEED: f32 = 1.0;
    pub const ENEMY_MAX_SPEED: f32 = 3.0;
    /// Default meteor sprite size when textures are unavailable
    pub const DEFAULT_SKIN_SIZE: u32 = 43;

    /// Score awarded per destroyed enemy
    pub const SCORE_PER_ENEMY: u32 = 50;

    /// Score text position while playing
    pub const SCORE_TEXT_X: i32 = 650;
    pub const SCORE_TEXT_Y: i32 = 10;
    /// Game over screen text rows
    pub const GAME_OVER_TITLE_Y: i32 = 200;
    pub const GAME_OVER_SCORE_Y: i32 = 300;
    pub const GAME_OVER_PROMPT_Y: i32 = 400;
}
