pub mod components;
pub mod config;
pub mod geom;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use geom::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one fixed frame of the coin-pong simulation
///
/// A frame is atomic: all reads and writes happen here, in order, before
/// the renderer sees the result. Timers advance one frame per call.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    clock: &mut FrameClock,
    config: &Config,
    score: &mut Score,
    history: &mut HitHistory,
    events: &mut Events,
    input: &mut InputQueue,
    coin_timer: &mut CoinSpawnTimer,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest sampled input (paddle intents, serve clicks)
    ingest_inputs(world, input, config, rng);

    // 2. Move paddles, then the ball
    move_paddles(world, config);
    move_ball(world);

    // 3. Resolve wall/paddle collisions (may start the boost window)
    check_collisions(world, config, events);

    // 4. Ball out of bounds -> reset in place, point awarded in the fold
    check_ball_exit(world, config, events, rng);

    // 5. Fold hits/exits into history + score before coins resolve, so
    //    ball pickups credit this frame's hitter
    apply_hit_events(events, history, score);

    // 6. Boost timer counts down every frame, including the setting one
    boost_tick(world, config);

    // 7. Coins: spawn on the interval, age, expire, resolve pickups
    spawn_coins(world, coin_timer, config, rng);
    update_coins(world, config, history, events);
    apply_coin_scores(events, score);

    clock.tick();
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the ball entity, stationary at center awaiting the
/// serve click
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::stationary(config.ball_spawn(), config.ball_speed_initial),))
}
