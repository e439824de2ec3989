//! Collision detection and response
//!
//! Bullets destroy at most one enemy each per tick. Any enemy touching the
//! player ends the run.

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::SCORE_PER_ENEMY;

/// Remove every bullet/enemy pair that overlaps and award score.
///
/// Bullets are checked in the order they were fired. Each one scans enemies
/// in spawn order and takes the first one it overlaps. Returns the number
/// of enemies destroyed.
pub fn resolve_bullet_hits(state: &mut GameState) -> usize {
    let mut destroyed = 0;
    let mut bullet_idx = 0;

    while bullet_idx < state.bullets.len() {
        let bullet = state.bullets[bullet_idx].rect;
        let hit = state.enemies.iter().position(|e| bullet.intersects(&e.rect));

        match hit {
            Some(enemy_idx) => {
                state.enemies.remove(enemy_idx);
                state.bullets.remove(bullet_idx);
                state.score += SCORE_PER_ENEMY;
                destroyed += 1;
                let score = state.score;
                state.push_event(GameEvent::EnemyDestroyed { score });
            }
            None => bullet_idx += 1,
        }
    }

    destroyed
}

/// True if any enemy overlaps the player ship
pub fn player_hit(state: &GameState) -> bool {
    let player = state.player.rect;
    state.enemies.iter().any(|e| player.intersects(&e.rect))
}

/// Resolve all collisions for this tick.
///
/// Transitions to [`GamePhase::GameOver`] at most once; a session that is
/// already over is left untouched.
pub fn check_collisions(state: &mut GameState) {
    if state.is_game_over() {
        return;
    }

    resolve_bullet_hits(state);

    if player_hit(state) {
        state.phase = GamePhase::GameOver;
        log::info!("Game over! Final score: {}", state.score);
        let score = state.score;
        state.push_event(GameEvent::GameOver { score });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Bullet, Enemy, EnemySkin, SkinSizes};

    fn enemy_at(rect: Rect) -> Enemy {
        let mut enemy = Enemy::new(rect.x, EnemySkin::Brown, 1.0, 1.0, &SkinSizes::default());
        enemy.pos.y = rect.y as f32;
        enemy.rect = rect;
        enemy
    }

    fn empty_state() -> GameState {
        GameState::new(42, SkinSizes::default())
    }

    #[test]
    fn test_bullet_hit_removes_both_and_scores() {
        let mut state = empty_state();
        state.bullets.push(Bullet::new(Rect::new(398, 400, 4, 10)));
        state.enemies.push(enemy_at(Rect::new(390, 395, 30, 30)));
        // Keep the player out of the way
        state.player.rect.y = 550;
        state.player.rect.x = -25;

        check_collisions(&mut state);

        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 50);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(
            state.drain_events().collect::<Vec<_>>(),
            vec![GameEvent::EnemyDestroyed { score: 50 }]
        );
    }

    #[test]
    fn test_one_enemy_per_bullet_in_spawn_order() {
        let mut state = empty_state();
        state.bullets.push(Bullet::new(Rect::new(398, 100, 4, 10)));
        let first = enemy_at(Rect::new(390, 95, 30, 30));
        let second = enemy_at(Rect::new(385, 90, 40, 40));
        state.enemies.push(first);
        state.enemies.push(second.clone());

        assert_eq!(resolve_bullet_hits(&mut state), 1);
        assert_eq!(state.enemies, vec![second]);
        assert_eq!(state.score, 50);
    }

    #[test]
    fn test_bullets_checked_in_fire_order() {
        let mut state = empty_state();
        state.enemies.push(enemy_at(Rect::new(0, 0, 10, 10)));
        state.enemies.push(enemy_at(Rect::new(100, 0, 10, 10)));
        state.enemies.push(enemy_at(Rect::new(108, 0, 10, 10)));
        // First hits the left enemy, second only the middle one,
        // third overlaps both the middle and the right one
        state.bullets.push(Bullet::new(Rect::new(2, 0, 4, 10)));
        state.bullets.push(Bullet::new(Rect::new(101, 0, 4, 10)));
        state.bullets.push(Bullet::new(Rect::new(107, 0, 4, 10)));

        assert_eq!(resolve_bullet_hits(&mut state), 3);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 150);
    }

    #[test]
    fn test_two_bullets_two_enemies() {
        let mut state = empty_state();
        state.bullets.push(Bullet::new(Rect::new(100, 100, 4, 10)));
        state.bullets.push(Bullet::new(Rect::new(101, 100, 4, 10)));
        state.enemies.push(enemy_at(Rect::new(90, 90, 30, 30)));
        state.enemies.push(enemy_at(Rect::new(95, 95, 30, 30)));

        assert_eq!(resolve_bullet_hits(&mut state), 2);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_missing_bullet_survives() {
        let mut state = empty_state();
        state.bullets.push(Bullet::new(Rect::new(10, 10, 4, 10)));
        state.enemies.push(enemy_at(Rect::new(500, 10, 30, 30)));

        assert_eq!(resolve_bullet_hits(&mut state), 0);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_player_overlap_triggers_game_over_once() {
        let mut state = empty_state();
        assert_eq!(state.player.rect, Rect::new(300, 400, 50, 50));
        state.enemies.push(enemy_at(Rect::new(310, 410, 30, 30)));
        state.enemies.push(enemy_at(Rect::new(320, 420, 30, 30)));

        check_collisions(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Already over: nothing else happens
        check_collisions(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);

        let events: Vec<_> = state.drain_events().collect();
        assert_eq!(events, vec![GameEvent::GameOver { score: 0 }]);
    }

    #[test]
    fn test_destroyed_enemy_cannot_end_run() {
        let mut state = empty_state();
        // Bullet and enemy both inside the player box
        state.bullets.push(Bullet::new(Rect::new(320, 410, 4, 10)));
        state.enemies.push(enemy_at(Rect::new(310, 405, 30, 30)));

        check_collisions(&mut state);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 50);
    }
}
