//! Bundled asset paths and texture loading
//!
//! Assets are read from fixed paths relative to the working directory.
//! Any missing file aborts startup.

use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;

use crate::error::{StartupError, StartupResult};
use crate::sim::{EnemySkin, SkinSizes};

/// Every file the game loads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    PlayerShip,
    Background,
    MeteorBrown,
    MeteorGrey,
    Font,
    Music,
    LaserSound,
    GameOverSound,
}

impl Asset {
    pub fn path(self) -> &'static str {
        match self {
            Asset::PlayerShip => "assets/playerShip.png",
            Asset::Background => "assets/black.png",
            Asset::MeteorBrown => "assets/meteorBrown_med1.png",
            Asset::MeteorGrey => "assets/meteorGrey_med1.png",
            Asset::Font => "assets/font.otf",
            Asset::Music => "assets/welcome.mp3",
            Asset::LaserSound => "assets/laser.mp3",
            Asset::GameOverSound => "assets/gameOver.mp3",
        }
    }

    /// Texture used for a meteor skin
    pub fn for_skin(skin: EnemySkin) -> Asset {
        match skin {
            EnemySkin::Brown => Asset::MeteorBrown,
            EnemySkin::Grey => Asset::MeteorGrey,
        }
    }
}

/// All sprite textures, tied to the canvas' texture creator
pub struct Textures<'a> {
    pub player: Texture<'a>,
    pub background: Texture<'a>,
    meteors: [Texture<'a>; 2],
}

impl<'a> Textures<'a> {
    pub fn load(creator: &'a TextureCreator<WindowContext>) -> StartupResult<Self> {
        let player = load_texture(creator, Asset::PlayerShip)?;
        let background = load_texture(creator, Asset::Background)?;
        let meteors = [
            load_texture(creator, Asset::for_skin(EnemySkin::Brown))?,
            load_texture(creator, Asset::for_skin(EnemySkin::Grey))?,
        ];

        Ok(Self {
            player,
            background,
            meteors,
        })
    }

    pub fn meteor(&self, skin: EnemySkin) -> &Texture<'a> {
        &self.meteors[skin.index()]
    }

    /// Unscaled meteor sizes for sizing enemy boxes
    pub fn skin_sizes(&self) -> SkinSizes {
        let size = |skin: EnemySkin| {
            let query = self.meteor(skin).query();
            (query.width, query.height)
        };
        SkinSizes([size(EnemySkin::Brown), size(EnemySkin::Grey)])
    }
}

fn load_texture<'a>(
    creator: &'a TextureCreator<WindowContext>,
    asset: Asset,
) -> StartupResult<Texture<'a>> {
    let path = asset.path();
    let texture = creator
        .load_texture(path)
        .map_err(|e| StartupError::asset(path, e))?;
    log::debug!("Loaded texture {}", path);
    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skin_assets_are_distinct() {
        assert_ne!(
            Asset::for_skin(EnemySkin::Brown).path(),
            Asset::for_skin(EnemySkin::Grey).path()
        );
        assert_eq!(EnemySkin::ALL.len(), 2);
    }
}
