use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::Events;

/// Check ball collisions with walls and paddles
///
/// Wall reflections are resolved first, then the one paddle the ball is
/// moving toward. Any reflection starts the speed-boost window.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Snapshot the ball without holding the borrow
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| *ball)
    };

    let mut ball = match ball_data {
        Some(ball) => ball,
        None => return, // No ball in world
    };

    let mut reflected = false;

    // Top/bottom wall bounces. Clamp position so the ball never sticks
    // inside a wall.
    if ball.pos.y + config.ball_radius > config.window_height {
        ball.pos.y = config.window_height - config.ball_radius;
        ball.dir.y = -ball.dir.y.abs();
        events.ball_hit_wall = true;
        reflected = true;
    } else if ball.pos.y - config.ball_radius < 0.0 {
        ball.pos.y = config.ball_radius;
        ball.dir.y = ball.dir.y.abs();
        events.ball_hit_wall = true;
        reflected = true;
    }

    // Only the paddle the ball is moving toward can return it
    let facing = if ball.dir.x < 0.0 {
        Some(Side::Left)
    } else if ball.dir.x > 0.0 {
        Some(Side::Right)
    } else {
        None
    };

    if let Some(side) = facing {
        let paddle_y = world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y);

        if let Some(y) = paddle_y {
            let paddle = config.paddle_aabb(side, y);
            if paddle.intersects_circle(ball.pos, config.ball_radius) {
                // Reflect horizontally and push the ball out to the
                // paddle's inner face so it cannot re-collide next frame.
                match side {
                    Side::Left => {
                        ball.pos.x = paddle.max.x + config.ball_radius;
                        ball.dir.x = ball.dir.x.abs();
                    }
                    Side::Right => {
                        ball.pos.x = paddle.min.x - config.ball_radius;
                        ball.dir.x = -ball.dir.x.abs();
                    }
                }
                events.paddle_hits.push(side);
                reflected = true;
            }
        }
    }

    if reflected {
        ball.apply_boost(config);
    }

    for (_entity, b) in world.query_mut::<&mut Ball>() {
        *b = ball;
    }
}
