use hecs::World;

use crate::components::Ball;
use crate::config::Config;

/// Tick the speed-boost window: the timer decrements every frame
/// (including the frame a reflection set it) and the speed drops back to
/// initial exactly when it reaches zero.
pub fn boost_tick(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.boost_frames > 0 {
            ball.boost_frames -= 1;
            if ball.boost_frames == 0 {
                ball.speed = config.ball_speed_initial;
            }
        }
    }
}
