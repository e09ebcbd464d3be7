//! Asset loading. All the file names are hard-coded and loaded from the
//! `resources/` directory at startup.

use ggez::audio;
use ggez::audio::SoundSource;
use ggez::graphics;
use ggez::{Context, GameResult};

use game_core::Params;

pub struct Assets {
    coin_frames: Vec<graphics::Image>,
    pub font: Option<graphics::Font>,
    coin_sound: Option<audio::Source>,
}

impl Assets {
    /// Load everything up front. The coin animation frames are required:
    /// coin collision sizing derives from their dimensions, so a missing
    /// frame aborts startup. Font and sound are optional; the game runs
    /// without score text or audio if they fail to load.
    pub fn new(ctx: &mut Context) -> GameResult<Assets> {
        let mut coin_frames = Vec::with_capacity(Params::COIN_FRAME_COUNT);
        for i in 1..=Params::COIN_FRAME_COUNT {
            coin_frames.push(graphics::Image::new(ctx, format!("/coin_{:02}.png", i))?);
        }

        let font = match graphics::Font::new(ctx, "/font.ttf") {
            Ok(font) => Some(font),
            Err(err) => {
                eprintln!("Score font unavailable ({}); running without text", err);
                None
            }
        };

        let coin_sound = match audio::Source::new(ctx, "/coin.ogg") {
            Ok(sound) => Some(sound),
            Err(err) => {
                eprintln!("Pickup sound unavailable ({}); running silent", err);
                None
            }
        };

        Ok(Assets {
            coin_frames,
            font,
            coin_sound,
        })
    }

    /// Rendered (scaled) coin size in pixels; this is also the collision
    /// footprint the simulation uses.
    pub fn coin_footprint(&self) -> (f32, f32) {
        match self.coin_frames.first() {
            Some(frame) => (
                f32::from(frame.width()) * Params::COIN_DRAW_SCALE,
                f32::from(frame.height()) * Params::COIN_DRAW_SCALE,
            ),
            None => (
                Params::COIN_FRAME_SIZE * Params::COIN_DRAW_SCALE,
                Params::COIN_FRAME_SIZE * Params::COIN_DRAW_SCALE,
            ),
        }
    }

    /// Animation frame for the shared wall clock: frames advance every
    /// `COIN_ANIMATION_MS` and wrap around the loaded sequence.
    pub fn coin_frame(&self, elapsed_ms: u64) -> Option<&graphics::Image> {
        if self.coin_frames.is_empty() {
            return None;
        }
        let index = (elapsed_ms / Params::COIN_ANIMATION_MS) as usize % self.coin_frames.len();
        self.coin_frames.get(index)
    }

    /// Fire-and-forget pickup/hit sound; a silent no-op when the sound
    /// asset did not load.
    pub fn play_pickup_sound(&mut self) {
        if let Some(sound) = &mut self.coin_sound {
            let _ = sound.play();
        }
    }
}
