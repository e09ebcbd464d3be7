use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::Config;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.y += intent.dir as f32 * config.paddle_speed;
        }
        // Clamp to window bounds
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Move ball one frame along its direction
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.velocity();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Side;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_paddle_moves_by_speed() {
        let mut world = World::new();
        let config = Config::new();
        create_paddle(&mut world, Side::Left, 300.0);
        for (_e, intent) in world.query_mut::<&mut PaddleIntent>() {
            intent.dir = 1;
        }

        move_paddles(&mut world, &config);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.y, 300.0 + config.paddle_speed);
        }
    }

    #[test]
    fn test_paddle_stays_in_window() {
        let mut world = World::new();
        let config = Config::new();
        let half_height = config.paddle_height / 2.0;
        create_paddle(&mut world, Side::Left, half_height);
        for (_e, intent) in world.query_mut::<&mut PaddleIntent>() {
            intent.dir = -1;
        }

        // Push against the top edge for a while
        for _ in 0..100 {
            move_paddles(&mut world, &config);
        }

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.y, half_height, "Paddle must not leave the window");
        }
    }

    #[test]
    fn test_stationary_ball_does_not_move() {
        let mut world = World::new();
        let config = Config::new();
        create_ball(&mut world, &config);

        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, config.ball_spawn());
        }
    }

    #[test]
    fn test_ball_advances_by_velocity() {
        let mut world = World::new();
        let config = Config::new();
        create_ball(&mut world, &config);
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.launch(Vec2::new(1.0, 0.0), &config);
        }

        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            let expected = config.ball_spawn() + Vec2::new(config.ball_speed_initial, 0.0);
            assert_eq!(ball.pos, expected);
        }
    }
}
