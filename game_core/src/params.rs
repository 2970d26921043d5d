/// Game tuning parameters for Pong
///
/// Units are canvas pixels; speeds are pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_PADDING: f32 = 10.0; // gap between paddle and side edge
    pub const PLAYER_SPEED: f32 = 6.0;
    pub const COMPUTER_SPEED: f32 = 5.0;
    pub const OPPONENT_DEAD_ZONE: f32 = 6.0;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED_SERVE: f32 = 5.0;
    pub const BALL_SPEED_MAX: f32 = 12.0;
    pub const BALL_SPEED_STEP: f32 = 0.5; // added on every paddle hit
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3; // 60°
    pub const MAX_SERVE_ANGLE: f32 = std::f32::consts::FRAC_PI_6; // 30°

    // Net
    pub const NET_WIDTH: f32 = 2.0;
    pub const NET_SEGMENT: f32 = 16.0;
    pub const NET_STRIDE: f32 = 1.5; // segment pitch as a multiple of segment length

    // Logging
    pub const TICK_LOG_INTERVAL: u64 = 600;
}

/// Fill colours, as canvas style strings
#[derive(Debug, Clone, Copy)]
pub struct Palette;

impl Palette {
    pub const BACKGROUND: &'static str = "#07132a";
    pub const NET: &'static str = "rgba(255,255,255,0.08)";
    pub const PLAYER: &'static str = "#22d3ee";
    pub const COMPUTER: &'static str = "#b3eaf6";
    pub const BALL: &'static str = "#dbeef6";
    pub const BALL_OUTLINE: &'static str = "rgba(255,255,255,0.04)";
}
