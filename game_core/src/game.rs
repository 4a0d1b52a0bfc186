use std::sync::mpsc::{channel, Receiver, Sender};

use hecs::World;

use crate::render::{render, Surface};
use crate::scheduler::FixedTimestep;
use crate::{
    create_ball, create_computer, create_player, step, Ball, Computer, Config, ConfigError,
    Events, GameMap, InputEvent, InputState, Paddle, Player,
};

/// A running match: the world plus everything one tick needs
pub struct Game {
    pub world: World,
    pub map: GameMap,
    pub config: Config,
    pub input: InputState,
    pub events: Events,
    pub timestep: FixedTimestep,
    pub tick: u64,
    inbox: Receiver<InputEvent>,
    outbox: Sender<InputEvent>,
}

impl Game {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let map = GameMap::new();
        let mut world = World::new();
        create_player(&mut world, &map);
        create_computer(&mut world, &map);
        create_ball(
            &mut world,
            map.ball_spawn(),
            glam::Vec2::new(0.0, config.ball_speed_initial),
            config.ball_radius,
        );

        let (outbox, inbox) = channel();
        Ok(Self {
            world,
            map,
            timestep: FixedTimestep::from_config(&config),
            config,
            input: InputState::new(),
            events: Events::new(),
            tick: 0,
            inbox,
            outbox,
        })
    }

    /// Handle for event callbacks. Events queue up until the next tick.
    pub fn input_sender(&self) -> Sender<InputEvent> {
        self.outbox.clone()
    }

    /// Run one simulation tick
    pub fn update(&mut self) {
        for event in self.inbox.try_iter() {
            self.input.apply(event);
        }

        step(
            &mut self.world,
            &self.input,
            &self.map,
            &self.config,
            &mut self.events,
        );
        self.tick += 1;

        if self.events.player_scored {
            log::info!("Player scored on tick {}", self.tick);
        }
        if self.events.computer_scored {
            log::info!("Computer scored on tick {}", self.tick);
        }
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        render(&self.world, &self.map, &self.config.palette, surface);
    }

    /// Handle one display frame: run the ticks that are due, then draw.
    /// Returns the number of ticks run.
    pub fn frame<S: Surface>(&mut self, now_ms: f64, surface: &mut S) -> u32 {
        let ticks = self.timestep.advance(now_ms);
        for _ in 0..ticks {
            self.update();
        }
        self.render(surface);
        ticks
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn player_paddle(&self) -> Option<Paddle> {
        self.world
            .query::<(&Paddle, &Player)>()
            .iter()
            .next()
            .map(|(_e, (paddle, _))| *paddle)
    }

    pub fn computer_paddle(&self) -> Option<Paddle> {
        self.world
            .query::<(&Paddle, &Computer)>()
            .iter()
            .next()
            .map(|(_e, (paddle, _))| *paddle)
    }

    /// Overwrite the ball's state
    pub fn set_ball(&mut self, pos: glam::Vec2, vel: glam::Vec2) {
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }
}
