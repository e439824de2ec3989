//! Per-frame simulation tick
//!
//! Movement is counted in frames, not seconds: one call to [`tick`] is one
//! frame of the game.

use rand::Rng;

use super::collision::check_collisions;
use super::state::{Bullet, Enemy, EnemySkin, GameEvent, GameState};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Window close requested
    pub quit: bool,
    /// Fire key presses since the last tick (key repeat included)
    pub fire: u32,
    /// Held direction keys
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    /// Net movement for this tick in pixels
    pub fn movement(&self) -> (i32, i32) {
        let mut dx = 0;
        let mut dy = 0;
        if self.left {
            dx -= PLAYER_SPEED;
        }
        if self.right {
            dx += PLAYER_SPEED;
        }
        if self.up {
            dy -= PLAYER_SPEED;
        }
        if self.down {
            dy += PLAYER_SPEED;
        }
        (dx, dy)
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    apply_input(state, input);

    // Frozen until restart
    if state.is_game_over() {
        return;
    }

    move_bullets(state);
    update_spawner(state);
    move_enemies(state);
    check_collisions(state);
}

/// Fire presses and held movement keys.
///
/// Fire restarts the run from the game over screen. Movement is ignored
/// while the run is over.
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    for _ in 0..input.fire {
        if state.is_game_over() {
            log::info!("Restarting");
            state.reset();
        } else {
            fire(state);
        }
    }

    if state.is_game_over() {
        return;
    }

    let (dx, dy) = input.movement();
    if dx != 0 || dy != 0 {
        state.player.move_by(dx, dy);
    }
}

/// Spawn one bullet at the ship's nose
pub fn fire(state: &mut GameState) {
    let rect = state.player.muzzle();
    state.bullets.push(Bullet::new(rect));
    state.push_event(GameEvent::BulletFired);
}

/// Move bullets up and drop the ones that left the screen
pub fn move_bullets(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.rect.y -= BULLET_SPEED;
    }
    state.bullets.retain(|b| b.rect.y >= 0);
}

/// Count a frame and spawn an enemy once the interval has passed
pub fn update_spawner(state: &mut GameState) {
    state.spawn_timer += 1;
    if state.spawn_timer > SPAWN_INTERVAL_TICKS {
        spawn_enemy(state);
        state.spawn_timer = 0;
    }
}

/// Spawn a meteor above the screen with random column, size, speed and skin
pub fn spawn_enemy(state: &mut GameState) {
    let rng = &mut state.rng;
    let x = rng.random_range(0..=ENEMY_SPAWN_MAX_X);
    let scale = rng.random_range(ENEMY_MIN_SCALE..ENEMY_MAX_SCALE);
    let speed = rng.random_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED);
    let skin = EnemySkin::ALL[rng.random_range(0..EnemySkin::ALL.len())];

    let enemy = Enemy::new(x, skin, scale, speed, &state.skin_sizes);
    log::debug!(
        "Spawned {:?} meteor at x={} (scale {:.2}, speed {:.2})",
        skin,
        x,
        scale,
        speed
    );
    state.enemies.push(enemy);
}

/// Move enemies down and drop the ones that fell past the bottom
pub fn move_enemies(state: &mut GameState) {
    for enemy in &mut state.enemies {
        enemy.advance();
    }
    state.enemies.retain(|e| !e.is_off_screen());
}
