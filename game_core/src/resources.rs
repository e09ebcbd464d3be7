use glam::Vec2;

use crate::components::Side;

/// Frame clock: one tick per simulation step. All simulation timers are
/// denominated in these frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    pub frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.frame += 1;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Consecutive-hit state: which paddle touched the ball last, and how many
/// times in a row each side has returned it. At most one side's streak is
/// nonzero at any time.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitHistory {
    pub last: Option<Side>,
    left_streak: u8,
    right_streak: u8,
}

impl HitHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn streak(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left_streak,
            Side::Right => self.right_streak,
        }
    }

    fn streak_mut(&mut self, side: Side) -> &mut u8 {
        match side {
            Side::Left => &mut self.left_streak,
            Side::Right => &mut self.right_streak,
        }
    }

    /// Record a paddle hit. Returns true when the hit completes a
    /// two-in-a-row streak and earns the consecutive-hit bonus point;
    /// the streak restarts at zero afterwards.
    pub fn record_hit(&mut self, side: Side) -> bool {
        if self.last == Some(side) {
            let streak = self.streak_mut(side);
            *streak += 1;
            if *streak >= 2 {
                *streak = 0;
                return true;
            }
            false
        } else {
            *self.streak_mut(side) = 1;
            *self.streak_mut(side.opposite()) = 0;
            self.last = Some(side);
            false
        }
    }

    /// Forget everything; called when the ball is reset after a score.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Who physically touched a coin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collector {
    Ball,
    Paddle(Side),
}

/// A coin was collected this frame. `awardee` is the side credited with
/// the point: the collecting paddle's side, or for ball pickups the side
/// that last hit the ball (None when nobody has).
#[derive(Debug, Clone, Copy)]
pub struct CoinPickup {
    pub collector: Collector,
    pub awardee: Option<Side>,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub paddle_hits: Vec<Side>,
    pub ball_hit_wall: bool,
    /// Window edge the ball crossed (the *opposite* side scores)
    pub ball_exited: Option<Side>,
    pub coin_pickups: Vec<CoinPickup>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.paddle_hits.clear();
        self.ball_hit_wall = false;
        self.ball_exited = None;
        self.coin_pickups.clear();
    }

    /// Anything worth a pickup/hit sound this frame?
    pub fn any_hit(&self) -> bool {
        !self.paddle_hits.is_empty() || !self.coin_pickups.is_empty()
    }
}

/// Input sampled by the host each frame: one movement axis per paddle and
/// any mouse clicks since the last step.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub left_axis: i8,  // -1 = up, 0 = stop, 1 = down
    pub right_axis: i8,
    pub clicks: Vec<Vec2>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_axis(&mut self, side: Side, dir: i8) {
        match side {
            Side::Left => self.left_axis = dir,
            Side::Right => self.right_axis = dir,
        }
    }

    pub fn axis(&self, side: Side) -> i8 {
        match side {
            Side::Left => self.left_axis,
            Side::Right => self.right_axis,
        }
    }

    pub fn push_click(&mut self, pos: Vec2) {
        self.clicks.push(pos);
    }
}

/// Countdown to the next coin spawn
#[derive(Debug, Clone, Copy, Default)]
pub struct CoinSpawnTimer {
    pub frames: u32,
}

impl CoinSpawnTimer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
