pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod scheduler;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use render::{render, CommandList, DrawCommand, Surface};
pub use resources::*;
pub use scheduler::{FixedTimestep, FrameRequester};

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one deterministic simulation tick: player, computer, then ball
pub fn step(
    world: &mut World,
    input: &InputState,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Player paddle from held keys
    update_player(world, input, map, config);

    // 2. Computer paddle chases the ball
    update_computer(world, map, config);

    // 3. Ball: move, walls, scoring, paddles
    update_ball(world, map, config, events);
}

/// Helper to create the keyboard-controlled paddle at the bottom
pub fn create_player(world: &mut World, map: &GameMap) -> hecs::Entity {
    world.spawn((
        Paddle::new(
            map.player_spawn(),
            Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
        ),
        Player,
    ))
}

/// Helper to create the computer paddle at the top
pub fn create_computer(world: &mut World, map: &GameMap) -> hecs::Entity {
    world.spawn((
        Paddle::new(
            map.computer_spawn(),
            Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
        ),
        Computer,
    ))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
