use crate::{Arena, BallState, Config, Frame, InputSource, Side, Time};

/// Apply held paddle keys.
///
/// Both keys are judged against the Y the paddle had when the step began, so
/// holding up and down together moves it nowhere unless it sits on an edge.
/// The edge check happens before the move, which lets a paddle overshoot an
/// edge by at most one frame of travel and then stop.
pub fn move_paddles<I: InputSource + ?Sized>(
    frame: &mut Frame,
    input: &I,
    arena: &Arena,
    config: &Config,
    time: &Time,
) {
    let travel = config.paddle_step(time.dt);

    for side in [Side::Left, Side::Right] {
        let paddle = frame.paddle_mut(side);
        let start_y = paddle.y;

        if input.is_action_pressed(side.up_action()) && start_y > 0.0 {
            paddle.y -= travel;
        }
        if input.is_action_pressed(side.down_action()) && start_y < arena.height() {
            paddle.y += travel;
        }
    }
}

/// Move ball based on direction and speed
pub fn move_ball(frame: &mut Frame, ball: &BallState, time: &Time) {
    frame.ball += ball.velocity() * time.dt;
}
