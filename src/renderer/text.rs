//! Text rasterization and placement

use sdl2::pixels::Color;
use sdl2::rect::Rect as SdlRect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};

use crate::consts::SCREEN_WIDTH;

/// Where a line of text goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Top-left corner at a fixed point
    At { x: i32, y: i32 },
    /// Centered horizontally on the screen, top edge at `y`
    CenteredX { y: i32 },
}

impl TextAnchor {
    /// Top-left corner for text of the given rasterized width
    pub fn origin(self, text_width: u32) -> (i32, i32) {
        match self {
            TextAnchor::At { x, y } => (x, y),
            TextAnchor::CenteredX { y } => ((SCREEN_WIDTH as i32 - text_width as i32) / 2, y),
        }
    }
}

/// Rasterize and draw one line of text.
///
/// Failures are logged and the line is skipped; a missing label never
/// stops the game.
pub fn draw_text(
    canvas: &mut Canvas<Window>,
    creator: &TextureCreator<WindowContext>,
    font: &Font<'_, '_>,
    text: &str,
    color: Color,
    anchor: TextAnchor,
) {
    let surface = match font.render(text).solid(color) {
        Ok(surface) => surface,
        Err(e) => {
            log::warn!("Failed to render text {:?}: {}", text, e);
            return;
        }
    };

    let texture = match creator.create_texture_from_surface(&surface) {
        Ok(texture) => texture,
        Err(e) => {
            log::warn!("Failed to create text texture: {}", e);
            return;
        }
    };

    let (x, y) = anchor.origin(surface.width());
    let dst = SdlRect::new(x, y, surface.width(), surface.height());
    if let Err(e) = canvas.copy(&texture, None, Some(dst)) {
        log::warn!("Failed to draw text {:?}: {}", text, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_anchor_ignores_width() {
        assert_eq!(TextAnchor::At { x: 650, y: 10 }.origin(120), (650, 10));
    }

    #[test]
    fn test_centered_anchor() {
        assert_eq!(TextAnchor::CenteredX { y: 200 }.origin(160), (320, 200));
        // Wider than the screen spills evenly off both sides
        assert_eq!(TextAnchor::CenteredX { y: 0 }.origin(1000), (-100, 0));
    }
}
