use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Coin, Lifetime, Paddle, Side};
use crate::config::Config;
use crate::resources::{CoinPickup, CoinSpawnTimer, Collector, Events, GameRng, HitHistory};

/// Advance the spawn timer and drop a new coin when it elapses. Spawn
/// positions are drawn uniformly from the margin-excluded window area so a
/// coin never appears inside a paddle lane or half off screen.
pub fn spawn_coins(
    world: &mut World,
    timer: &mut CoinSpawnTimer,
    config: &Config,
    rng: &mut GameRng,
) {
    timer.frames += 1;
    if timer.frames < config.coin_spawn_interval {
        return;
    }
    timer.frames = 0;

    use rand::Rng;
    let area = config.coin_spawn_area();
    let pos = Vec2::new(
        rng.0.gen_range(area.min.x..area.max.x),
        rng.0.gen_range(area.min.y..area.max.y),
    );
    world.spawn((Coin { pos }, Lifetime::new(config.coin_lifetime)));
}

/// Age and resolve every live coin. Each coin has exactly one outcome per
/// frame: expire (no event), get collected (one pickup event), or survive.
pub fn update_coins(
    world: &mut World,
    config: &Config,
    history: &HitHistory,
    events: &mut Events,
) {
    // Age first: a coin on its last frame expires before anyone can grab
    // it, and a coin spawned this frame ages this frame.
    let mut expired = Vec::new();
    for (entity, lifetime) in world.query_mut::<&mut Lifetime>() {
        lifetime.frames_left = lifetime.frames_left.saturating_sub(1);
        if lifetime.is_expired() {
            expired.push(entity);
        }
    }
    for entity in expired {
        let _ = world.despawn(entity);
    }

    let ball_pos = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos)
    };

    let paddle_y = |world: &World, side: Side| {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
    };
    let left_y = paddle_y(world, Side::Left);
    let right_y = paddle_y(world, Side::Right);

    // Resolve pickups in deterministic entity order
    let mut coins: Vec<(hecs::Entity, Vec2)> = world
        .query::<(&Coin, &Lifetime)>()
        .iter()
        .map(|(entity, (coin, _))| (entity, coin.pos))
        .collect();
    coins.sort_by_key(|(entity, _)| entity.id());

    let mut collected = Vec::new();
    for (entity, pos) in coins {
        let footprint = config.coin_aabb(pos);

        // Priority: ball, then left paddle, then right paddle. The first
        // collector wins; a coin is never collected twice.
        let pickup = if ball_pos
            .map_or(false, |ball| footprint.intersects_circle(ball, config.ball_radius))
        {
            Some(CoinPickup {
                collector: Collector::Ball,
                awardee: history.last,
            })
        } else if left_y
            .map_or(false, |y| config.paddle_aabb(Side::Left, y).intersects(&footprint))
        {
            Some(CoinPickup {
                collector: Collector::Paddle(Side::Left),
                awardee: Some(Side::Left),
            })
        } else if right_y
            .map_or(false, |y| config.paddle_aabb(Side::Right, y).intersects(&footprint))
        {
            Some(CoinPickup {
                collector: Collector::Paddle(Side::Right),
                awardee: Some(Side::Right),
            })
        } else {
            None
        };

        if let Some(pickup) = pickup {
            collected.push((entity, pickup));
        }
    }

    for (entity, pickup) in collected {
        let _ = world.despawn(entity);
        events.coin_pickups.push(pickup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};

    fn setup() -> (World, Config, HitHistory, Events, CoinSpawnTimer, GameRng) {
        let world = World::new();
        let config = Config::new();
        let history = HitHistory::new();
        let events = Events::new();
        let timer = CoinSpawnTimer::new();
        let rng = GameRng::new(12345);
        (world, config, history, events, timer, rng)
    }

    fn coin_count(world: &World) -> usize {
        world.query::<&Coin>().iter().count()
    }

    fn spawn_coin_at(world: &mut World, pos: Vec2, frames: u32) -> hecs::Entity {
        world.spawn((Coin { pos }, Lifetime::new(frames)))
    }

    #[test]
    fn test_spawn_timer_cadence() {
        let (mut world, config, _history, _events, mut timer, mut rng) = setup();

        for _ in 0..config.coin_spawn_interval - 1 {
            spawn_coins(&mut world, &mut timer, &config, &mut rng);
        }
        assert_eq!(coin_count(&world), 0, "No coin before the interval elapses");

        spawn_coins(&mut world, &mut timer, &config, &mut rng);
        assert_eq!(coin_count(&world), 1, "One coin on the interval frame");
        assert_eq!(timer.frames, 0, "Timer resets after spawning");
    }

    #[test]
    fn test_spawned_coins_land_in_the_valid_area() {
        let (mut world, config, _history, _events, mut timer, mut rng) = setup();
        let area = config.coin_spawn_area();

        for _ in 0..20 {
            timer.frames = config.coin_spawn_interval - 1;
            spawn_coins(&mut world, &mut timer, &config, &mut rng);
        }

        for (_e, coin) in world.query::<&Coin>().iter() {
            assert!(area.contains(coin.pos), "Coin at {:?} outside spawn area", coin.pos);
        }
    }

    #[test]
    fn test_coin_expires_without_score_event() {
        let (mut world, config, history, mut events, _timer, _rng) = setup();
        spawn_coin_at(&mut world, Vec2::new(400.0, 300.0), 1);

        update_coins(&mut world, &config, &history, &mut events);

        assert_eq!(coin_count(&world), 0, "Expired coin removed");
        assert!(events.coin_pickups.is_empty(), "Expiry emits no event");
    }

    #[test]
    fn test_surviving_coin_just_ages() {
        let (mut world, config, history, mut events, _timer, _rng) = setup();
        let entity = spawn_coin_at(&mut world, Vec2::new(400.0, 300.0), 10);

        update_coins(&mut world, &config, &history, &mut events);

        let lifetime = world.get::<&Lifetime>(entity).ok().map(|l| l.frames_left);
        assert_eq!(lifetime, Some(9), "Untouched coin loses one frame");
        assert!(events.coin_pickups.is_empty());
    }

    #[test]
    fn test_ball_pickup_awards_last_hitter() {
        let (mut world, config, mut history, mut events, _timer, _rng) = setup();
        create_ball(&mut world, &config);
        history.record_hit(Side::Right);
        spawn_coin_at(&mut world, config.ball_spawn(), 100);

        update_coins(&mut world, &config, &history, &mut events);

        assert_eq!(coin_count(&world), 0);
        assert_eq!(events.coin_pickups.len(), 1);
        let pickup = events.coin_pickups[0];
        assert_eq!(pickup.collector, Collector::Ball);
        assert_eq!(pickup.awardee, Some(Side::Right));
    }

    #[test]
    fn test_ball_pickup_before_any_hit_awards_nobody() {
        let (mut world, config, history, mut events, _timer, _rng) = setup();
        create_ball(&mut world, &config);
        spawn_coin_at(&mut world, config.ball_spawn(), 100);

        update_coins(&mut world, &config, &history, &mut events);

        assert_eq!(coin_count(&world), 0, "Coin is still consumed");
        assert_eq!(events.coin_pickups.len(), 1);
        assert_eq!(events.coin_pickups[0].awardee, None);
    }

    #[test]
    fn test_paddle_pickup_awards_that_side() {
        let (mut world, config, history, mut events, _timer, _rng) = setup();
        create_paddle(&mut world, Side::Left, 300.0);
        // Coin overlapping the left paddle's lane
        spawn_coin_at(&mut world, Vec2::new(config.paddle_width, 300.0), 100);

        update_coins(&mut world, &config, &history, &mut events);

        assert_eq!(coin_count(&world), 0);
        assert_eq!(events.coin_pickups.len(), 1);
        let pickup = events.coin_pickups[0];
        assert_eq!(pickup.collector, Collector::Paddle(Side::Left));
        assert_eq!(pickup.awardee, Some(Side::Left));
    }

    #[test]
    fn test_ball_wins_double_overlap() {
        let (mut world, config, mut history, mut events, _timer, _rng) = setup();
        history.record_hit(Side::Right);
        create_paddle(&mut world, Side::Left, 300.0);
        create_ball(&mut world, &config);

        // Ball and left paddle both overlap the same coin
        let pos = Vec2::new(config.paddle_width, 300.0);
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = pos;
        }
        spawn_coin_at(&mut world, pos, 100);

        update_coins(&mut world, &config, &history, &mut events);

        assert_eq!(coin_count(&world), 0, "Coin removed exactly once");
        assert_eq!(events.coin_pickups.len(), 1, "Exactly one pickup event");
        assert_eq!(
            events.coin_pickups[0].collector,
            Collector::Ball,
            "Ball takes priority over the paddle"
        );
        assert_eq!(events.coin_pickups[0].awardee, Some(Side::Right));
    }

    #[test]
    fn test_expiry_beats_pickup_on_the_same_frame() {
        let (mut world, config, history, mut events, _timer, _rng) = setup();
        create_ball(&mut world, &config);
        // Coin under the ball, but on its final frame
        spawn_coin_at(&mut world, config.ball_spawn(), 1);

        update_coins(&mut world, &config, &history, &mut events);

        assert_eq!(coin_count(&world), 0);
        assert!(
            events.coin_pickups.is_empty(),
            "A coin expiring this frame cannot also be collected"
        );
    }
}
