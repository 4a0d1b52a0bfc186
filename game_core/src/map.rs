use glam::Vec2;

use crate::params::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extent(center: Vec2, half: f32) -> Self {
        Self {
            min: center - Vec2::splat(half),
            max: center + Vec2::splat(half),
        }
    }

    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    /// Strict overlap: boxes that only touch along an edge do not intersect
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The play field. Origin top-left, y grows downward.
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl Default for GameMap {
    fn default() -> Self {
        Self {
            width: Params::FIELD_WIDTH,
            height: Params::FIELD_HEIGHT,
        }
    }
}

impl GameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn midline(&self) -> f32 {
        self.height / 2.0
    }

    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(Params::PLAYER_SPAWN.0, Params::PLAYER_SPAWN.1)
    }

    pub fn computer_spawn(&self) -> Vec2 {
        Vec2::new(Params::COMPUTER_SPAWN.0, Params::COMPUTER_SPAWN.1)
    }

    /// Clamp a body's left edge so the body stays inside the field.
    /// Returns the clamped x and whether clamping happened.
    pub fn clamp_x(&self, x: f32, body_width: f32) -> (f32, bool) {
        if x < 0.0 {
            (0.0, true)
        } else if x + body_width > self.width {
            (self.width - body_width, true)
        } else {
            (x, false)
        }
    }
}
