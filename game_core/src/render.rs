//! Backend-neutral drawing
//!
//! The simulation never talks to a canvas directly. Anything that can clear,
//! fill a rectangle and fill a stroked circle can show the game.

use glam::Vec2;
use hecs::World;

use crate::{Ball, Computer, GameMap, Paddle, Palette, Player};

/// A 2D drawing target. Colors are CSS color strings.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32, color: &str);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &str, stroke: &str);
}

impl Paddle {
    pub fn render<S: Surface>(&self, surface: &mut S, palette: &Palette) {
        surface.fill_rect(self.pos, self.size, &palette.paddle);
    }
}

impl Ball {
    pub fn render<S: Surface>(&self, surface: &mut S, palette: &Palette) {
        surface.fill_circle(self.pos, self.radius, &palette.ball_fill, &palette.ball_stroke);
    }
}

/// Draw one frame: background, player, computer, ball
pub fn render<S: Surface>(world: &World, map: &GameMap, palette: &Palette, surface: &mut S) {
    surface.clear(map.width, map.height, &palette.background);

    for (_e, (paddle, _)) in world.query::<(&Paddle, &Player)>().iter() {
        paddle.render(surface, palette);
    }
    for (_e, (paddle, _)) in world.query::<(&Paddle, &Computer)>().iter() {
        paddle.render(surface, palette);
    }
    for (_e, ball) in world.query::<&Ball>().iter() {
        ball.render(surface, palette);
    }
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
        color: String,
    },
    Rect {
        pos: Vec2,
        size: Vec2,
        color: String,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: String,
        stroke: String,
    },
}

/// Surface that records draw calls instead of drawing. Used headless and in tests.
#[derive(Debug, Clone, Default)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded frame, leaving the list empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for CommandList {
    fn clear(&mut self, width: f32, height: f32, color: &str) {
        self.commands.push(DrawCommand::Clear {
            width,
            height,
            color: color.to_string(),
        });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.commands.push(DrawCommand::Rect {
            pos,
            size,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: &str, stroke: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill: fill.to_string(),
            stroke: stroke.to_string(),
        });
    }
}
