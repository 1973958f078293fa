/// Game tuning parameters for the paddle game
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Ball
    pub const INITIAL_BALL_SPEED: f32 = 80.0; // pixels per second
    pub const PADDLE_SPEED_UP: f32 = 1.1; // Multiply speed on paddle hit
    pub const BOUNCE_SPREAD: f32 = 1.0; // Bounce Y drawn from [-spread, spread)

    // Paddle
    pub const PAD_SPEED: f32 = 150.0; // pixels per second
}
