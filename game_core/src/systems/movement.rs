use hecs::World;

use super::{bounce_off_walls, check_scoring, collide_with_paddles};
use crate::{Ball, Computer, Config, Events, GameMap, Paddle, Player};

/// Move the ball and resolve walls, scoring and paddles against both paddles
pub fn update_ball(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    let player_paddle = world
        .query::<(&Paddle, &Player)>()
        .iter()
        .next()
        .map(|(_e, (paddle, _))| *paddle);
    let computer_paddle = world
        .query::<(&Paddle, &Computer)>()
        .iter()
        .next()
        .map(|(_e, (paddle, _))| *paddle);

    let (Some(player_paddle), Some(computer_paddle)) = (player_paddle, computer_paddle) else {
        log::warn!("Skipping ball update: both paddles are required");
        return;
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        step_ball(ball, &player_paddle, &computer_paddle, map, config, events);
    }
}

/// One tick of ball motion
pub fn step_ball(
    ball: &mut Ball,
    player_paddle: &Paddle,
    computer_paddle: &Paddle,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
) {
    ball.pos += ball.vel;
    let bounds = ball.bounds(config.ball_half_extent);

    bounce_off_walls(ball, map, config, events);

    if check_scoring(ball, map, config, events) {
        return;
    }

    collide_with_paddles(
        ball,
        bounds,
        player_paddle,
        computer_paddle,
        map,
        config,
        events,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_computer, create_player};
    use glam::Vec2;

    fn setup() -> (Paddle, Paddle, GameMap, Config, Events) {
        let map = GameMap::new();
        let size = Vec2::new(100.0, 10.0);
        (
            Paddle::new(map.player_spawn(), size),
            Paddle::new(map.computer_spawn(), size),
            map,
            Config::new(),
            Events::new(),
        )
    }

    #[test]
    fn test_ball_advances_by_velocity() {
        let (player, computer, map, config, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(200.0, 300.0), Vec2::new(0.0, 5.0), 7.0);
        step_ball(&mut ball, &player, &computer, &map, &config, &mut events);
        assert_eq!(ball.pos, Vec2::new(200.0, 305.0));
        assert_eq!(ball.vel, Vec2::new(0.0, 5.0));
        assert!(!events.any());
    }

    #[test]
    fn test_ball_bounces_off_left_wall() {
        let (player, computer, map, config, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(2.0, 300.0), Vec2::new(-3.0, 5.0), 7.0);
        step_ball(&mut ball, &player, &computer, &map, &config, &mut events);
        assert_eq!(ball.pos, Vec2::new(5.0, 305.0));
        assert_eq!(ball.vel.x, 3.0);
    }

    #[test]
    fn test_ball_resets_after_leaving_top() {
        let (player, computer, map, config, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(200.0, -1.0), Vec2::new(0.0, 0.0), 7.0);
        step_ball(&mut ball, &player, &computer, &map, &config, &mut events);
        assert_eq!(ball.pos, Vec2::new(200.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(0.0, 3.0));
        assert!(events.player_scored);
    }

    #[test]
    fn test_scoring_skips_paddle_test() {
        let (_, computer, map, config, mut events) = setup();
        // Paddle sunk to the bottom edge so the scoring ball still overlaps it
        let player = Paddle::new(Vec2::new(150.0, 595.0), Vec2::new(100.0, 10.0));
        let mut ball = Ball::new(Vec2::new(200.0, 597.0), Vec2::new(0.0, 5.0), 7.0);
        step_ball(&mut ball, &player, &computer, &map, &config, &mut events);
        assert!(events.computer_scored);
        assert!(!events.ball_hit_player_paddle);
        assert_eq!(ball.vel, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_wall_bounce_and_paddle_hit_in_one_tick() {
        let (_, computer, map, config, mut events) = setup();
        // Paddle hugging the left wall; the ball overshoots the wall into its box
        let player = Paddle::new(Vec2::new(0.0, 580.0), Vec2::new(100.0, 10.0));
        let mut ball = Ball::new(Vec2::new(3.0, 575.0), Vec2::new(-6.0, 5.0), 7.0);
        step_ball(&mut ball, &player, &computer, &map, &config, &mut events);
        assert!(events.ball_hit_wall);
        assert!(events.ball_hit_player_paddle);
        assert_eq!(ball.pos, Vec2::new(5.0, 577.0));
        assert_eq!(ball.vel, Vec2::new(6.0, -3.0));
    }

    #[test]
    fn test_update_ball_in_world() {
        let (_, _, map, config, mut events) = setup();
        let mut world = World::new();
        create_player(&mut world, &map);
        create_computer(&mut world, &map);
        let ball = create_ball(&mut world, map.ball_spawn(), Vec2::new(0.0, 5.0), 7.0);

        update_ball(&mut world, &map, &config, &mut events);

        assert_eq!(world.get::<&Ball>(ball).unwrap().pos, Vec2::new(200.0, 305.0));
    }

    #[test]
    fn test_update_ball_without_paddles_is_noop() {
        let (_, _, map, config, mut events) = setup();
        let mut world = World::new();
        let ball = create_ball(&mut world, map.ball_spawn(), Vec2::new(0.0, 5.0), 7.0);

        update_ball(&mut world, &map, &config, &mut events);

        assert_eq!(world.get::<&Ball>(ball).unwrap().pos, Vec2::new(200.0, 300.0));
    }
}
