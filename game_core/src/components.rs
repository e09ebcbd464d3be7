use glam::Vec2;

use crate::config::Config;
use crate::resources::GameRng;

/// Which player a paddle (or a point) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Center Y (clamped to window)
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball
///
/// Direction and speed are kept separate: `dir` is a unit vector whenever
/// the ball is moving (zero before the first serve), and `speed` is always
/// either the initial speed or the boosted speed.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub dir: Vec2,
    pub speed: f32,
    pub boost_frames: u32,
}

impl Ball {
    /// A stationary ball awaiting the serve click.
    pub fn stationary(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            dir: Vec2::ZERO,
            speed,
            boost_frames: 0,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.dir * self.speed
    }

    pub fn is_stationary(&self) -> bool {
        self.dir == Vec2::ZERO
    }

    /// Send the ball off in `dir` at initial speed, clearing any boost.
    pub fn launch(&mut self, dir: Vec2, config: &Config) {
        self.dir = dir;
        self.speed = config.ball_speed_initial;
        self.boost_frames = 0;
    }

    /// Reset ball to center with a fresh random launch direction
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.ball_spawn();
        self.launch(random_launch_dir(rng), config);
    }

    /// Start (or restart) the speed-boost window. Boost is set, not
    /// stacked: a second reflection in the same window just restarts it.
    pub fn apply_boost(&mut self, config: &Config) {
        self.boost_frames = config.ball_boost_frames;
        self.speed = config.ball_speed_initial * config.ball_boost_factor;
    }
}

/// Collectible coin. Liveness is by entity presence; the paired `Lifetime`
/// component counts down to despawn.
#[derive(Debug, Clone, Copy)]
pub struct Coin {
    pub pos: Vec2,
}

/// Remaining lifetime in frames
#[derive(Debug, Clone, Copy)]
pub struct Lifetime {
    pub frames_left: u32,
}

impl Lifetime {
    pub fn new(frames: u32) -> Self {
        Self { frames_left: frames }
    }

    pub fn is_expired(&self) -> bool {
        self.frames_left == 0
    }
}

/// Draw a random unit launch direction, rejecting angles too close to an
/// axis so serves never crawl along a wall or straight at a paddle edge.
/// Roughly 31% of draws are rejected, so ~1.45 draws are expected; the
/// retry bound is effectively unreachable and falls back to a diagonal.
pub fn random_launch_dir(rng: &mut GameRng) -> Vec2 {
    use rand::Rng;

    const MIN_AXIS_COMPONENT: f32 = 0.2;
    const MAX_DRAWS: u32 = 32;

    for _ in 0..MAX_DRAWS {
        let angle: f32 = rng.0.gen_range(0.0..std::f32::consts::TAU);
        let (sin, cos) = angle.sin_cos();
        if sin.abs() < MIN_AXIS_COMPONENT || cos.abs() < MIN_AXIS_COMPONENT {
            continue;
        }
        let dir = Vec2::new(cos, sin);
        // (cos, sin) is already unit length; guard against a degenerate
        // vector anyway rather than dividing by zero.
        if dir.length_squared() > 0.0 {
            return dir.normalize();
        }
    }

    Vec2::new(std::f32::consts::FRAC_1_SQRT_2, std::f32::consts::FRAC_1_SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::GameRng;

    #[test]
    fn test_launch_dir_is_unit_length() {
        let mut rng = GameRng::new(7);
        for _ in 0..100 {
            let dir = random_launch_dir(&mut rng);
            assert!(
                (dir.length() - 1.0).abs() < 1e-5,
                "Launch direction should be unit length, got {}",
                dir.length()
            );
        }
    }

    #[test]
    fn test_launch_dir_avoids_axis_aligned_angles() {
        let mut rng = GameRng::new(12345);
        for _ in 0..1000 {
            let dir = random_launch_dir(&mut rng);
            // dir = (cos, sin) of the accepted angle
            assert!(
                dir.x.abs() >= 0.2 && dir.y.abs() >= 0.2,
                "Accepted direction {:?} is too close to an axis",
                dir
            );
        }
    }

    #[test]
    fn test_ball_launch_clears_boost() {
        let config = Config::new();
        let mut ball = Ball::stationary(config.ball_spawn(), config.ball_speed_initial);
        ball.apply_boost(&config);
        assert!(ball.boost_frames > 0);

        ball.launch(Vec2::new(1.0, 0.0), &config);
        assert_eq!(ball.boost_frames, 0);
        assert_eq!(ball.speed, config.ball_speed_initial);
        assert!(!ball.is_stationary());
    }

    #[test]
    fn test_ball_reset_centers_and_relaunches() {
        let config = Config::new();
        let mut rng = GameRng::new(42);
        let mut ball = Ball::stationary(Vec2::new(5.0, 5.0), config.ball_speed_initial);
        ball.reset(&config, &mut rng);

        assert_eq!(ball.pos, config.ball_spawn());
        assert!((ball.dir.length() - 1.0).abs() < 1e-5);
        assert_eq!(ball.speed, config.ball_speed_initial);
        assert_eq!(ball.boost_frames, 0);
    }

    #[test]
    fn test_boost_is_set_not_stacked() {
        let config = Config::new();
        let mut ball = Ball::stationary(Vec2::ZERO, config.ball_speed_initial);
        ball.apply_boost(&config);
        let boosted = ball.speed;
        ball.apply_boost(&config);

        assert_eq!(ball.speed, boosted, "Second reflection must not stack speed");
        assert_eq!(ball.boost_frames, config.ball_boost_frames);
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }
}
