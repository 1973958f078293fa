use crate::{Arena, BallState, Config, Events, Frame, Side};

/// Serve again from the center once the ball has left through a side edge.
///
/// Bounces applied earlier in the same step are overwritten, not undone.
pub fn serve_if_out_of_bounds(
    frame: &mut Frame,
    ball: &mut BallState,
    arena: &Arena,
    config: &Config,
    events: &mut Events,
) {
    let exited = if frame.ball.x < 0.0 {
        Some(Side::Left)
    } else if frame.ball.x > arena.width() {
        Some(Side::Right)
    } else {
        None
    };

    if let Some(side) = exited {
        log::info!(
            "Ball left past the {:?} edge at speed {:.1}, serving again",
            side,
            ball.speed
        );
        frame.ball = arena.center();
        *ball = BallState::serve_left(config.initial_ball_speed);
        events.ball_exited = Some(side);
    }
}
