//! Local game wrapper: the simulation world plus every per-frame resource,
//! with read-only snapshot accessors for the renderer.

use game_core::{
    create_ball, create_paddle, step, Aabb, Ball, Coin, CoinSpawnTimer, Config, Events,
    FrameClock, GameRng, HitHistory, InputQueue, Paddle, Score, Side,
};
use glam::Vec2;
use hecs::World;

pub struct PongGame {
    pub world: World,
    pub clock: FrameClock,
    pub config: Config,
    pub score: Score,
    pub history: HitHistory,
    pub events: Events,
    pub input: InputQueue,
    pub coin_timer: CoinSpawnTimer,
    pub rng: GameRng,
}

impl PongGame {
    pub fn new(config: Config, rng: GameRng) -> Self {
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, config.paddle_spawn_y());
        create_paddle(&mut world, Side::Right, config.paddle_spawn_y());
        create_ball(&mut world, &config);

        Self {
            world,
            clock: FrameClock::new(),
            config,
            score: Score::new(),
            history: HitHistory::new(),
            events: Events::new(),
            input: InputQueue::new(),
            coin_timer: CoinSpawnTimer::new(),
            rng,
        }
    }

    /// Advance one fixed frame. Input axes/clicks must already be set for
    /// this frame; events are valid until the next call.
    pub fn step(&mut self) {
        step(
            &mut self.world,
            &mut self.clock,
            &self.config,
            &mut self.score,
            &mut self.history,
            &mut self.events,
            &mut self.input,
            &mut self.coin_timer,
            &mut self.rng,
        );
    }

    /// Ball center and radius for drawing
    pub fn ball(&self) -> (Vec2, f32) {
        let pos = {
            let mut query = self.world.query::<&Ball>();
            query
                .iter()
                .next()
                .map(|(_e, ball)| ball.pos)
                .unwrap_or_else(|| self.config.ball_spawn())
        };
        (pos, self.config.ball_radius)
    }

    /// Both paddle rectangles
    pub fn paddles(&self) -> Vec<(Side, Aabb)> {
        self.world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| (paddle.side, self.config.paddle_aabb(paddle.side, paddle.y)))
            .collect()
    }

    /// Centers of all live coins
    pub fn coin_positions(&self) -> Vec<Vec2> {
        self.world
            .query::<&Coin>()
            .iter()
            .map(|(_e, coin)| coin.pos)
            .collect()
    }
}
