use std::collections::BTreeSet;

use crate::params::Params;

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,   // Ball left through the top
    pub computer_scored: bool, // Ball left through the bottom
    pub ball_hit_wall: bool,
    pub ball_hit_player_paddle: bool,
    pub ball_hit_computer_paddle: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.computer_scored = false;
        self.ball_hit_wall = false;
        self.ball_hit_player_paddle = false;
        self.ball_hit_computer_paddle = false;
    }

    pub fn any(&self) -> bool {
        self.player_scored
            || self.computer_scored
            || self.ball_hit_wall
            || self.ball_hit_player_paddle
            || self.ball_hit_computer_paddle
    }
}

/// Key transition delivered from the host's event callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(u32),
    KeyUp(u32),
}

/// Key codes currently held down. Iterates in ascending key code order.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed: BTreeSet<u32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(code) => {
                if self.pressed.contains(&code) {
                    return;
                }
                if self.pressed.len() >= Params::MAX_PRESSED_KEYS {
                    log::warn!(
                        "Dropping key {code}: already holding {} keys",
                        self.pressed.len()
                    );
                    return;
                }
                self.pressed.insert(code);
            }
            InputEvent::KeyUp(code) => {
                self.pressed.remove(&code);
            }
        }
    }

    pub fn pressed(&self) -> impl Iterator<Item = u32> + '_ {
        self.pressed.iter().copied()
    }

    pub fn is_pressed(&self, code: u32) -> bool {
        self.pressed.contains(&code)
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pressed.len()
    }
}
