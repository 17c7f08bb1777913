/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_INSET: f32 = 10.0; // gap between side wall and paddle
    pub const PADDLE_STEP: f32 = 10.0; // per frame while a key is held
    pub const AI_TRACK_SPEED: f32 = 5.0; // per frame

    // Ball
    pub const BALL_SIZE: f32 = 7.0;
    pub const BALL_SPEED_X: f32 = 5.0; // |vx| at serve
    pub const BALL_SPEED_Y: f32 = 3.0; // |vy| at serve
    pub const BALL_DEFLECTION: f32 = 5.0; // vy per unit of relative hit offset
    pub const BALL_MIN_SPEED_Y: f32 = 3.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply velocity on paddle hit
    pub const BALL_PADDLE_GAP: f32 = 1.0; // push-out distance after a hit

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins
}
