use glam::Vec2;

use crate::map::{Aabb, GameMap};

/// Paddle component - a rectangular body anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2, // Last applied move, per tick
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    /// Move by `delta`, record it as the paddle velocity, then keep the paddle inside the field.
    /// Hitting a side wall kills the horizontal velocity.
    pub fn move_by(&mut self, delta: Vec2, map: &GameMap) {
        self.pos += delta;
        self.vel = delta;

        let (x, clamped) = map.clamp_x(self.pos.x, self.size.x);
        if clamped {
            self.pos.x = x;
            self.vel.x = 0.0;
        }
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_corner_size(self.pos, self.size)
    }
}

/// Ball component - positioned by its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Collision box around the center
    pub fn bounds(&self, half_extent: f32) -> Aabb {
        Aabb::from_center_half_extent(self.pos, half_extent)
    }

    /// Put the ball back on the spot, moving straight up or down
    pub fn serve(&mut self, spot: Vec2, vel_y: f32) {
        self.pos = spot;
        self.vel = Vec2::new(0.0, vel_y);
    }
}

/// Marks the paddle steered by keyboard input
#[derive(Debug, Clone, Copy, Default)]
pub struct Player;

/// Marks the paddle steered by the ball-tracking controller
#[derive(Debug, Clone, Copy, Default)]
pub struct Computer;
