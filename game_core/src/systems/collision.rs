use crate::{Aabb, Ball, Config, Events, GameMap, Paddle};

/// Reflect the ball off the left and right walls
pub fn bounce_off_walls(ball: &mut Ball, map: &GameMap, config: &Config, events: &mut Events) {
    let half = config.ball_half_extent;
    if ball.pos.x - half < 0.0 {
        ball.pos.x = half;
        ball.vel.x = -ball.vel.x;
        events.ball_hit_wall = true;
    } else if ball.pos.x + half > map.width {
        ball.pos.x = map.width - half;
        ball.vel.x = -ball.vel.x;
        events.ball_hit_wall = true;
    }

    if events.ball_hit_wall {
        log::trace!("Ball hit a side wall at x = {}", ball.pos.x);
    }
}

/// Test the ball against the paddle guarding the half it is in.
///
/// `bounds` is the ball's box as it stood after this tick's advance. On a hit the
/// ball is sent back at the fixed bounce speed, picks up part of the paddle's
/// sideways velocity, and is stepped once more so it clears the paddle.
pub fn collide_with_paddles(
    ball: &mut Ball,
    bounds: Aabb,
    player_paddle: &Paddle,
    computer_paddle: &Paddle,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
) {
    if bounds.min.y > map.midline() {
        if bounds.overlaps(&player_paddle.bounds()) {
            deflect(ball, player_paddle, -config.ball_bounce_speed, config);
            events.ball_hit_player_paddle = true;
            log::trace!("Ball hit the player paddle, vel = {}", ball.vel);
        }
    } else if bounds.overlaps(&computer_paddle.bounds()) {
        deflect(ball, computer_paddle, config.ball_bounce_speed, config);
        events.ball_hit_computer_paddle = true;
        log::trace!("Ball hit the computer paddle, vel = {}", ball.vel);
    }
}

fn deflect(ball: &mut Ball, paddle: &Paddle, vel_y: f32, config: &Config) {
    ball.vel.y = vel_y;
    ball.vel.x += paddle.vel.x * config.spin_transfer;
    ball.pos.y += ball.vel.y;
}
