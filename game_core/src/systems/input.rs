use hecs::World;

use crate::components::{random_launch_dir, Ball, Paddle, PaddleIntent};
use crate::config::Config;
use crate::resources::{GameRng, InputQueue};

/// Apply the sampled input to the simulation: movement axes become paddle
/// intents, and queued clicks may serve a stationary ball.
pub fn ingest_inputs(world: &mut World, input: &mut InputQueue, config: &Config, rng: &mut GameRng) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = input.axis(paddle.side);
    }

    // A click serves the ball only while it is stationary and only if it
    // lands inside the ball's circle.
    for click in input.clicks.drain(..) {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            if !ball.is_stationary() {
                continue;
            }
            if click.distance_squared(ball.pos) <= config.ball_radius * config.ball_radius {
                let dir = random_launch_dir(rng);
                ball.launch(dir, config);
            }
        }
    }
}
