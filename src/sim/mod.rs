//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-count timing only (no wall clock)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{check_collisions, player_hit, resolve_bullet_hits};
pub use rect::Rect;
pub use state::{Bullet, Enemy, EnemySkin, GameEvent, GamePhase, GameState, Player, SkinSizes};
pub use tick::{TickInput, apply_input, tick};
