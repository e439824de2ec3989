//! Game state and core simulation types
//!
//! Everything a play-through mutates lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Side effects requested by the simulation, drained by the app each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player fired a bullet
    BulletFired,
    /// A bullet destroyed an enemy
    EnemyDestroyed { score: u32 },
    /// Player collided with an enemy
    GameOver { score: u32 },
    /// Session was reset from the game over screen
    Restarted,
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub rect: Rect,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_SIZE, PLAYER_SIZE),
        }
    }
}

impl Player {
    /// Move by a pixel offset, clamped to the play bounds.
    /// Each axis is clamped on its own, so diagonals cover more distance.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.rect.x = (self.rect.x + dx).clamp(PLAYER_MIN_X, PLAYER_MAX_X);
        self.rect.y = (self.rect.y + dy).clamp(PLAYER_MIN_Y, PLAYER_MAX_Y);
    }

    /// Bullet box centered on the ship's nose
    pub fn muzzle(&self) -> Rect {
        Rect::new(
            self.rect.center_x() - BULLET_WIDTH / 2,
            self.rect.y,
            BULLET_WIDTH,
            BULLET_HEIGHT,
        )
    }
}

/// A player bullet travelling up the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    pub rect: Rect,
}

impl Bullet {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }
}

/// Meteor appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemySkin {
    Brown,
    Grey,
}

impl EnemySkin {
    pub const ALL: [EnemySkin; 2] = [EnemySkin::Brown, EnemySkin::Grey];

    pub fn index(self) -> usize {
        match self {
            EnemySkin::Brown => 0,
            EnemySkin::Grey => 1,
        }
    }
}

/// Unscaled pixel size of each meteor skin, indexed by [`EnemySkin::index`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkinSizes(pub [(u32, u32); 2]);

impl Default for SkinSizes {
    fn default() -> Self {
        Self([(DEFAULT_SKIN_SIZE, DEFAULT_SKIN_SIZE); 2])
    }
}

impl SkinSizes {
    pub fn get(&self, skin: EnemySkin) -> (u32, u32) {
        self.0[skin.index()]
    }
}

/// A falling meteor
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    /// Sub-pixel position (top-left)
    pub pos: Vec2,
    /// Drawn and collided box, truncated from `pos`
    pub rect: Rect,
    pub skin: EnemySkin,
    /// Size multiplier applied to the skin
    pub scale: f32,
    /// Fall speed in pixels per tick
    pub speed: f32,
}

impl Enemy {
    pub fn new(x: i32, skin: EnemySkin, scale: f32, speed: f32, sizes: &SkinSizes) -> Self {
        let (w, h) = sizes.get(skin);
        let pos = Vec2::new(x as f32, ENEMY_SPAWN_Y);
        Self {
            pos,
            rect: Rect::new(
                pos.x as i32,
                pos.y as i32,
                (w as f32 * scale) as i32,
                (h as f32 * scale) as i32,
            ),
            skin,
            scale,
            speed,
        }
    }

    /// Fall one tick and refresh the box position
    pub fn advance(&mut self) {
        self.pos.y += self.speed;
        self.rect.x = self.pos.x as i32;
        self.rect.y = self.pos.y as i32;
    }

    /// Fell past the bottom of the screen
    pub fn is_off_screen(&self) -> bool {
        self.pos.y > ENEMY_DESPAWN_Y
    }
}

/// Complete session state for one play-through
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG (survives restarts)
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Score
    pub score: u32,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    /// Total simulated ticks, including game over
    pub time_ticks: u64,
    /// Player ship
    pub player: Player,
    /// Live bullets (order irrelevant)
    pub bullets: Vec<Bullet>,
    /// Live enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Meteor sprite sizes used to size new enemies
    pub skin_sizes: SkinSizes,
    /// Events raised since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, skin_sizes: SkinSizes) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            score: 0,
            spawn_timer: 0,
            time_ticks: 0,
            player: Player::default(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            skin_sizes,
            events: Vec::new(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Start a fresh play-through. The RNG keeps its stream.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.player = Player::default();
        self.bullets.clear();
        self.enemies.clear();
        self.spawn_timer = 0;
        self.push_event(GameEvent::Restarted);
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events raised since the previous call
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(7, SkinSizes::default());
        assert_eq!(state.seed, 7);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.spawn_timer, 0);
        assert_eq!(state.player.rect, Rect::new(300, 400, 50, 50));
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_player_clamps_to_bounds() {
        let mut player = Player::default();
        player.move_by(-10_000, -10_000);
        assert_eq!((player.rect.x, player.rect.y), (PLAYER_MIN_X, PLAYER_MIN_Y));
        player.move_by(10_000, 10_000);
        assert_eq!((player.rect.x, player.rect.y), (PLAYER_MAX_X, PLAYER_MAX_Y));
    }

    #[test]
    fn test_muzzle_is_centered_on_ship() {
        let player = Player::default();
        assert_eq!(player.muzzle(), Rect::new(323, 400, 4, 10));
    }

    #[test]
    fn test_enemy_box_scales_with_skin() {
        let sizes = SkinSizes([(40, 20), (100, 80)]);
        let enemy = Enemy::new(120, EnemySkin::Grey, 0.5, 2.0, &sizes);
        assert_eq!(enemy.rect, Rect::new(120, -50, 50, 40));

        let enemy = Enemy::new(0, EnemySkin::Brown, 1.25, 2.0, &sizes);
        assert_eq!((enemy.rect.w, enemy.rect.h), (50, 25));
    }

    #[test]
    fn test_enemy_advance_truncates_position() {
        let mut enemy = Enemy::new(10, EnemySkin::Brown, 1.0, 1.75, &SkinSizes::default());
        enemy.advance();
        assert_eq!(enemy.pos.y, -48.25);
        // Truncation toward zero, not floor
        assert_eq!(enemy.rect.y, -48);
        enemy.advance();
        assert_eq!(enemy.rect.y, -46);
    }

    #[test]
    fn test_reset_restores_initial_session() {
        let mut state = GameState::new(1, SkinSizes::default());
        state.phase = GamePhase::GameOver;
        state.score = 350;
        state.spawn_timer = 12;
        state.player.move_by(100, -100);
        state.bullets.push(Bullet::new(Rect::new(1, 2, 4, 10)));
        state
            .enemies
            .push(Enemy::new(5, EnemySkin::Grey, 1.0, 1.0, &SkinSizes::default()));

        state.reset();

        assert_eq!(state.seed, 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.spawn_timer, 0);
        assert_eq!(state.player.rect, Rect::new(300, 400, 50, 50));
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.drain_events().collect::<Vec<_>>(), vec![GameEvent::Restarted]);
    }
}
