use crate::{Ball, Config, Events, GameMap};

/// Check if the ball left the field through the top or bottom and serve it again.
/// Returns true when a point was scored this tick.
pub fn check_scoring(ball: &mut Ball, map: &GameMap, config: &Config, events: &mut Events) -> bool {
    let player_scored = if ball.pos.y < 0.0 {
        events.player_scored = true;
        true
    } else if ball.pos.y > map.height {
        events.computer_scored = true;
        false
    } else {
        return false;
    };

    log::debug!(
        "{} scored, ball left at {}",
        if player_scored { "Player" } else { "Computer" },
        ball.pos
    );

    ball.serve(map.ball_spawn(), config.serve_velocity_y(player_scored));
    log::debug!("Ball served from {} with vel {}", ball.pos, ball.vel);
    true
}
