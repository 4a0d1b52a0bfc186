use glam::Vec2;
use hecs::World;

use crate::{Config, GameMap, InputState, Paddle, Player};

/// Apply held keys to the player's paddle
pub fn update_player(world: &mut World, input: &InputState, map: &GameMap, config: &Config) {
    for (_entity, (paddle, _player)) in world.query_mut::<(&mut Paddle, &Player)>() {
        steer_paddle(paddle, input, map, config);
    }
}

/// One move per held key, in key code order. Unbound keys still move by zero,
/// which wipes any leftover velocity.
pub fn steer_paddle(paddle: &mut Paddle, input: &InputState, map: &GameMap, config: &Config) {
    if input.is_empty() {
        if config.decay_momentum_on_release {
            paddle.vel = Vec2::ZERO;
        }
        return;
    }

    for code in input.pressed() {
        let dx = if code == config.left_key {
            -config.player_speed
        } else if code == config.right_key {
            config.player_speed
        } else {
            0.0
        };
        paddle.move_by(Vec2::new(dx, 0.0), map);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputEvent;

    fn setup() -> (Paddle, InputState, GameMap, Config) {
        let map = GameMap::new();
        let paddle = Paddle::new(map.player_spawn(), Vec2::new(100.0, 10.0));
        (paddle, InputState::new(), map, Config::new())
    }

    #[test]
    fn test_left_arrow_moves_left() {
        let (mut paddle, mut input, map, config) = setup();
        input.apply(InputEvent::KeyDown(37));
        steer_paddle(&mut paddle, &input, &map, &config);
        assert_eq!(paddle.pos.x, 146.0);
        assert_eq!(paddle.vel.x, -4.0);
    }

    #[test]
    fn test_right_arrow_moves_right() {
        let (mut paddle, mut input, map, config) = setup();
        input.apply(InputEvent::KeyDown(39));
        steer_paddle(&mut paddle, &input, &map, &config);
        assert_eq!(paddle.pos.x, 154.0);
        assert_eq!(paddle.vel.x, 4.0);
    }

    #[test]
    fn test_unbound_key_zeroes_momentum() {
        let (mut paddle, mut input, map, config) = setup();
        paddle.vel.x = 4.0;
        input.apply(InputEvent::KeyDown(65));
        steer_paddle(&mut paddle, &input, &map, &config);
        assert_eq!(paddle.pos.x, 150.0, "Unbound key should not move the paddle");
        assert_eq!(paddle.vel.x, 0.0, "Unbound key should wipe velocity");
    }

    #[test]
    fn test_released_keys_keep_momentum_by_default() {
        let (mut paddle, mut input, map, config) = setup();
        input.apply(InputEvent::KeyDown(39));
        steer_paddle(&mut paddle, &input, &map, &config);
        input.apply(InputEvent::KeyUp(39));
        steer_paddle(&mut paddle, &input, &map, &config);
        assert_eq!(paddle.pos.x, 154.0);
        assert_eq!(paddle.vel.x, 4.0, "Velocity should linger after release");
    }

    #[test]
    fn test_released_keys_decay_when_enabled() {
        let (mut paddle, mut input, map, mut config) = setup();
        config.decay_momentum_on_release = true;
        input.apply(InputEvent::KeyDown(39));
        steer_paddle(&mut paddle, &input, &map, &config);
        input.apply(InputEvent::KeyUp(39));
        steer_paddle(&mut paddle, &input, &map, &config);
        assert_eq!(paddle.vel.x, 0.0);
    }

    #[test]
    fn test_both_arrows_apply_in_key_code_order() {
        let (mut paddle, mut input, map, config) = setup();
        input.apply(InputEvent::KeyDown(39));
        input.apply(InputEvent::KeyDown(37));
        steer_paddle(&mut paddle, &input, &map, &config);
        assert_eq!(paddle.pos.x, 150.0, "Left then right cancel out");
        assert_eq!(paddle.vel.x, 4.0, "Right arrow is applied last");
    }

    #[test]
    fn test_arrow_with_higher_unbound_key() {
        let (mut paddle, mut input, map, config) = setup();
        input.apply(InputEvent::KeyDown(37));
        input.apply(InputEvent::KeyDown(65));
        steer_paddle(&mut paddle, &input, &map, &config);
        assert_eq!(paddle.pos.x, 146.0);
        assert_eq!(paddle.vel.x, 0.0);
    }

    #[test]
    fn test_custom_bindings() {
        let (mut paddle, mut input, map, mut config) = setup();
        config.left_key = 65; // A
        config.right_key = 68; // D
        input.apply(InputEvent::KeyDown(68));
        steer_paddle(&mut paddle, &input, &map, &config);
        assert_eq!(paddle.vel.x, 4.0);
    }

    #[test]
    fn test_update_player_only_moves_player_paddle() {
        let (paddle, mut input, map, config) = setup();
        let mut world = World::new();
        let player = world.spawn((paddle, Player));
        let other = world.spawn((paddle,));
        input.apply(InputEvent::KeyDown(37));

        update_player(&mut world, &input, &map, &config);

        assert_eq!(world.get::<&Paddle>(player).unwrap().pos.x, 146.0);
        assert_eq!(world.get::<&Paddle>(other).unwrap().pos.x, 150.0);
    }
}
