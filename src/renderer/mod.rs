//! SDL2 canvas rendering
//!
//! Reads the simulation state and draws it. Never mutates the game.

pub mod text;

use sdl2::pixels::Color;
use sdl2::rect::Rect as SdlRect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};

use crate::assets::Textures;
use crate::consts::*;
use crate::sim::{GamePhase, GameState, Rect};
pub use text::TextAnchor;

const CLEAR_COLOR: Color = Color::RGB(0, 0, 0);
const BULLET_COLOR: Color = Color::RGB(255, 0, 0);
const TEXT_COLOR: Color = Color::RGB(255, 255, 255);
const GAME_OVER_COLOR: Color = Color::RGB(255, 0, 0);

/// Convert a simulation box to an SDL rect
pub fn to_sdl_rect(rect: &Rect) -> SdlRect {
    SdlRect::new(rect.x, rect.y, rect.w.max(0) as u32, rect.h.max(0) as u32)
}

/// HUD score label
pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

/// Game over screen score label
pub fn final_score_label(score: u32) -> String {
    format!("Final Score: {}", score)
}

pub const GAME_OVER_TITLE: &str = "GAME OVER";
pub const RESTART_PROMPT: &str = "Press SPACE to restart";

/// Draws frames from textures and a font loaded at startup
pub struct Renderer<'tex, 'ttf> {
    creator: &'tex TextureCreator<WindowContext>,
    textures: Textures<'tex>,
    font: Font<'ttf, 'static>,
}

impl<'tex, 'ttf> Renderer<'tex, 'ttf> {
    pub fn new(
        creator: &'tex TextureCreator<WindowContext>,
        textures: Textures<'tex>,
        font: Font<'ttf, 'static>,
    ) -> Self {
        Self {
            creator,
            textures,
            font,
        }
    }

    /// Render the current frame
    pub fn render(&self, canvas: &mut Canvas<Window>, state: &GameState) {
        canvas.set_draw_color(CLEAR_COLOR);
        canvas.clear();

        match state.phase {
            GamePhase::Playing => self.draw_playing(canvas, state),
            GamePhase::GameOver => self.draw_game_over(canvas, state),
        }

        canvas.present();
    }

    fn draw_playing(&self, canvas: &mut Canvas<Window>, state: &GameState) {
        if let Err(e) = canvas.copy(&self.textures.background, None, None) {
            log::warn!("Failed to draw background: {}", e);
        }
        if let Err(e) = canvas.copy(
            &self.textures.player,
            None,
            Some(to_sdl_rect(&state.player.rect)),
        ) {
            log::warn!("Failed to draw player: {}", e);
        }

        canvas.set_draw_color(BULLET_COLOR);
        for bullet in &state.bullets {
            if let Err(e) = canvas.fill_rect(to_sdl_rect(&bullet.rect)) {
                log::warn!("Failed to draw bullet: {}", e);
            }
        }

        for enemy in &state.enemies {
            let texture = self.textures.meteor(enemy.skin);
            if let Err(e) = canvas.copy(texture, None, Some(to_sdl_rect(&enemy.rect))) {
                log::warn!("Failed to draw meteor: {}", e);
            }
        }

        self.text(
            canvas,
            &score_label(state.score),
            TEXT_COLOR,
            TextAnchor::At {
                x: SCORE_TEXT_X,
                y: SCORE_TEXT_Y,
            },
        );
    }

    fn draw_game_over(&self, canvas: &mut Canvas<Window>, state: &GameState) {
        self.text(
            canvas,
            GAME_OVER_TITLE,
            GAME_OVER_COLOR,
            TextAnchor::CenteredX {
                y: GAME_OVER_TITLE_Y,
            },
        );
        self.text(
            canvas,
            &final_score_label(state.score),
            TEXT_COLOR,
            TextAnchor::CenteredX {
                y: GAME_OVER_SCORE_Y,
            },
        );
        self.text(
            canvas,
            RESTART_PROMPT,
            TEXT_COLOR,
            TextAnchor::CenteredX {
                y: GAME_OVER_PROMPT_Y,
            },
        );
    }

    fn text(&self, canvas: &mut Canvas<Window>, text: &str, color: Color, anchor: TextAnchor) {
        text::draw_text(canvas, self.creator, &self.font, text, color, anchor);
    }
}
