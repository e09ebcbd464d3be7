use glam::Vec2;

use crate::components::Side;
use crate::geom::Aabb;

/// Game tuning parameters
///
/// Speeds are pixels per frame and timers are whole frames: the simulation
/// advances one fixed step per rendered frame at `SIM_FPS`.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    // Ball
    pub const BALL_RADIUS: f32 = 15.0;
    pub const BALL_SPEED_INITIAL: f32 = 4.0;
    pub const BALL_BOOST_FACTOR: f32 = 1.2;
    pub const BALL_BOOST_FRAMES: u32 = 30;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 6.0;

    // Coins
    pub const COIN_SPAWN_INTERVAL: u32 = 300; // ~5 s at 60 FPS
    pub const COIN_LIFETIME: u32 = 600; // ~10 s
    pub const COIN_DRAW_SCALE: f32 = 0.8;
    pub const COIN_FRAME_COUNT: usize = 8;
    pub const COIN_FRAME_SIZE: f32 = 32.0; // Source frame edge, pre-scale

    // Timing
    pub const SIM_FPS: u32 = 60;
    pub const COIN_ANIMATION_MS: u64 = 100; // Per animation frame
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_boost_factor: f32,
    pub ball_boost_frames: u32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub coin_spawn_interval: u32,
    pub coin_lifetime: u32,
    // Coin collision footprint: rendered (scaled) texture dimensions.
    pub coin_width: f32,
    pub coin_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: Params::WINDOW_WIDTH,
            window_height: Params::WINDOW_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_boost_factor: Params::BALL_BOOST_FACTOR,
            ball_boost_frames: Params::BALL_BOOST_FRAMES,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            coin_spawn_interval: Params::COIN_SPAWN_INTERVAL,
            coin_lifetime: Params::COIN_LIFETIME,
            coin_width: Params::COIN_FRAME_SIZE * Params::COIN_DRAW_SCALE,
            coin_height: Params::COIN_FRAME_SIZE * Params::COIN_DRAW_SCALE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default coin footprint with one measured from the
    /// loaded textures (already scaled for drawing).
    pub fn with_coin_footprint(mut self, width: f32, height: f32) -> Self {
        self.coin_width = width;
        self.coin_height = height;
        self
    }

    /// Center X position for a paddle. Paddles sit flush against the
    /// window edges.
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_width / 2.0,
            Side::Right => self.window_width - self.paddle_width / 2.0,
        }
    }

    /// Clamp a paddle center Y so the paddle stays fully on screen
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.window_height - half_height)
    }

    pub fn paddle_aabb(&self, side: Side, y: f32) -> Aabb {
        Aabb::from_center_size(
            Vec2::new(self.paddle_x(side), y),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }

    pub fn coin_aabb(&self, pos: Vec2) -> Aabb {
        Aabb::from_center_size(pos, Vec2::new(self.coin_width, self.coin_height))
    }

    /// Where the ball sits at startup and after every score
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.window_width / 2.0, self.window_height / 2.0)
    }

    /// Where a paddle sits at startup
    pub fn paddle_spawn_y(&self) -> f32 {
        self.window_height / 2.0
    }

    /// Valid coin spawn area: the window minus a paddle-wide margin on the
    /// left/right and half a coin footprint on every edge, so spawned coins
    /// never overlap a paddle lane or stick out of the window.
    pub fn coin_spawn_area(&self) -> Aabb {
        Aabb::new(
            Vec2::new(
                self.paddle_width + self.coin_width / 2.0,
                self.coin_height / 2.0,
            ),
            Vec2::new(
                self.window_width - self.paddle_width - self.coin_width / 2.0,
                self.window_height - self.coin_height / 2.0,
            ),
        )
    }
}
