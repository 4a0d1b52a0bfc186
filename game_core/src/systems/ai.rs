use glam::Vec2;
use hecs::World;

use crate::{Ball, Computer, Config, GameMap, Paddle};

/// Steer the computer paddle toward the ball
pub fn update_computer(world: &mut World, map: &GameMap, config: &Config) {
    let ball_x = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.x);

    let Some(ball_x) = ball_x else {
        return; // No ball in world
    };

    for (_entity, (paddle, _computer)) in world.query_mut::<(&mut Paddle, &Computer)>() {
        track_ball(paddle, ball_x, map, config);
    }
}

/// Proportional tracking of the ball's x. Small offsets are closed in one tick;
/// anything past the gate snaps to the max speed, which is what lets the ball get by.
pub fn track_ball(paddle: &mut Paddle, ball_x: f32, map: &GameMap, config: &Config) {
    let mut diff = ball_x - paddle.center_x();
    if diff < -config.computer_gate {
        diff = -config.computer_max_speed;
    } else if diff > config.computer_gate {
        diff = config.computer_max_speed;
    }
    let diff = diff.clamp(-config.computer_max_speed, config.computer_max_speed);
    paddle.move_by(Vec2::new(diff, 0.0), map);
}
