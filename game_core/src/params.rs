/// Game tuning parameters for the paddle ball game
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PLAYER_SPAWN: (f32, f32) = (150.0, 580.0); // top-left corner
    pub const COMPUTER_SPAWN: (f32, f32) = (175.0, 10.0);
    pub const PLAYER_SPEED: f32 = 4.0; // units per tick
    pub const COMPUTER_GATE: f32 = 4.0; // |diff| above this snaps to max speed
    pub const COMPUTER_MAX_SPEED: f32 = 5.0;

    // Ball
    pub const BALL_RADIUS: f32 = 7.0; // drawn radius
    pub const BALL_HALF_EXTENT: f32 = 5.0; // collision box half size
    pub const BALL_SPEED_INITIAL: f32 = 5.0;
    pub const BALL_SERVE_SPEED: f32 = 3.0;
    pub const BALL_BOUNCE_SPEED: f32 = 3.0;
    pub const SPIN_TRANSFER: f32 = 0.5;

    // Input
    pub const KEY_LEFT: u32 = 37;
    pub const KEY_RIGHT: u32 = 39;
    pub const MAX_PRESSED_KEYS: usize = 16;

    // Loop
    pub const TICK_RATE: f32 = 60.0; // Hz
    pub const MAX_FRAME_MS: f32 = 100.0; // Clamp to prevent large catch-up bursts
    pub const MAX_FRAME_MS_LIMIT: f32 = 1000.0;

    // Palette
    pub const BACKGROUND_COLOR: &'static str = "#e2e1eb";
    pub const PADDLE_COLOR: &'static str = "#342D33";
    pub const BALL_FILL_COLOR: &'static str = "#fff";
    pub const BALL_STROKE_COLOR: &'static str = "#342D33";
}
