use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Errors raised while loading or validating a [`Config`]
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Config is not valid JSON : {0}")]
    Parse(#[from] serde_json::Error),

    #[error("`{field}` must be a finite positive number - got `{value}`")]
    NotPositive { field: &'static str, value: f32 },

    #[error("`{field}` must be a finite number - got `{value}`")]
    NotFinite { field: &'static str, value: f32 },

    #[error("`{field}` must be at most {max} - got `{value}`")]
    TooLarge {
        field: &'static str,
        value: f32,
        max: f32,
    },

    #[error("`computer_gate` ({gate}) must not exceed `computer_max_speed` ({max_speed})")]
    GateAboveMaxSpeed { gate: f32, max_speed: f32 },

    #[error("Left and right are both bound to key code `{0}`")]
    SameKeyBinding(u32),
}

/// Which way the ball is served after a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServeDirection {
    /// Always serve downward, toward the player
    #[default]
    AlwaysDown,
    /// Serve toward the side that conceded the point
    TowardConceder,
}

/// Fill and stroke colors, as CSS color strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub paddle: String,
    pub ball_fill: String,
    pub ball_stroke: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Params::BACKGROUND_COLOR.to_string(),
            paddle: Params::PADDLE_COLOR.to_string(),
            ball_fill: Params::BALL_FILL_COLOR.to_string(),
            ball_stroke: Params::BALL_STROKE_COLOR.to_string(),
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player_speed: f32,
    pub computer_gate: f32,
    pub computer_max_speed: f32,
    pub ball_radius: f32,
    pub ball_half_extent: f32,
    pub ball_speed_initial: f32,
    pub ball_serve_speed: f32,
    pub ball_bounce_speed: f32,
    pub spin_transfer: f32,
    pub serve_direction: ServeDirection,
    /// Zero the player paddle's velocity on ticks with no key held
    pub decay_momentum_on_release: bool,
    pub left_key: u32,
    pub right_key: u32,
    pub tick_rate: f32,
    pub max_frame_ms: f32,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_speed: Params::PLAYER_SPEED,
            computer_gate: Params::COMPUTER_GATE,
            computer_max_speed: Params::COMPUTER_MAX_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_half_extent: Params::BALL_HALF_EXTENT,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_serve_speed: Params::BALL_SERVE_SPEED,
            ball_bounce_speed: Params::BALL_BOUNCE_SPEED,
            spin_transfer: Params::SPIN_TRANSFER,
            serve_direction: ServeDirection::default(),
            decay_momentum_on_release: false,
            left_key: Params::KEY_LEFT,
            right_key: Params::KEY_RIGHT,
            tick_rate: Params::TICK_RATE,
            max_frame_ms: Params::MAX_FRAME_MS,
            palette: Palette::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON object; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("player_speed", self.player_speed),
            ("computer_gate", self.computer_gate),
            ("computer_max_speed", self.computer_max_speed),
            ("ball_radius", self.ball_radius),
            ("ball_half_extent", self.ball_half_extent),
            ("ball_serve_speed", self.ball_serve_speed),
            ("ball_bounce_speed", self.ball_bounce_speed),
            ("tick_rate", self.tick_rate),
            ("max_frame_ms", self.max_frame_ms),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let finite = [
            ("ball_speed_initial", self.ball_speed_initial),
            ("spin_transfer", self.spin_transfer),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        // Offsets up to the gate pass through uncapped
        if self.computer_gate > self.computer_max_speed {
            return Err(ConfigError::GateAboveMaxSpeed {
                gate: self.computer_gate,
                max_speed: self.computer_max_speed,
            });
        }

        if self.max_frame_ms > Params::MAX_FRAME_MS_LIMIT {
            return Err(ConfigError::TooLarge {
                field: "max_frame_ms",
                value: self.max_frame_ms,
                max: Params::MAX_FRAME_MS_LIMIT,
            });
        }

        if self.left_key == self.right_key {
            return Err(ConfigError::SameKeyBinding(self.left_key));
        }
        Ok(())
    }

    /// Vertical serve velocity after a point; `player_scored` is true when the ball left the top
    pub fn serve_velocity_y(&self, player_scored: bool) -> f32 {
        match self.serve_direction {
            ServeDirection::AlwaysDown => self.ball_serve_speed,
            ServeDirection::TowardConceder if player_scored => -self.ball_serve_speed,
            ServeDirection::TowardConceder => self.ball_serve_speed,
        }
    }

    /// Duration of one simulation tick in whole microseconds
    pub fn tick_micros(&self) -> u64 {
        ((1_000_000.0 / self.tick_rate as f64) as u64).max(1)
    }
}
