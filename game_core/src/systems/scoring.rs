use hecs::World;

use crate::components::{Ball, Side};
use crate::config::Config;
use crate::resources::{Events, GameRng, HitHistory, Score};

/// Check if the ball left the window past either paddle. The ball is reset
/// in place (center, fresh random launch, initial speed, boost cleared);
/// the point itself is awarded by the event fold below.
pub fn check_ball_exit(world: &mut World, config: &Config, events: &mut Events, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - config.ball_radius < 0.0 {
            events.ball_exited = Some(Side::Left);
            ball.reset(config, rng);
        } else if ball.pos.x + config.ball_radius > config.window_width {
            events.ball_exited = Some(Side::Right);
            ball.reset(config, rng);
        }
    }
}

/// Fold this frame's paddle hits and exits into the hit history and score.
/// Runs before coin pickup resolution so that a ball-collected coin is
/// credited with this frame's hit already recorded.
pub fn apply_hit_events(events: &Events, history: &mut HitHistory, score: &mut Score) {
    for &side in &events.paddle_hits {
        if history.record_hit(side) {
            score.award(side);
        }
    }

    if let Some(edge) = events.ball_exited {
        score.award(edge.opposite());
        history.reset();
    }
}

/// Fold this frame's coin pickups into the score. Pickups with no awardee
/// (ball pickup before anyone touched the ball) consume the coin silently.
pub fn apply_coin_scores(events: &Events, score: &mut Score) {
    for pickup in &events.coin_pickups {
        if let Some(side) = pickup.awardee {
            score.award(side);
        }
    }
}
