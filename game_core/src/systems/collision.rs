use glam::Vec2;
use rand::Rng;

use crate::{Arena, BallState, Config, Events, Frame, Rect, Side};

/// Flip the ball's vertical direction once it is past the top or bottom edge.
///
/// Works off the position left by the previous frame's move, so the flip
/// lands one frame late; the direction check keeps it from flipping back.
pub fn bounce_off_walls(ball_pos: Vec2, ball: &mut BallState, arena: &Arena, events: &mut Events) {
    // Ceiling
    if ball_pos.y < 0.0 && ball.direction.y < 0.0 {
        ball.direction.y = -ball.direction.y;
        events.ball_hit_wall = true;
        log::trace!("Ball bounced off the ceiling at x={}", ball_pos.x);
    }

    // Floor
    if ball_pos.y > arena.height() && ball.direction.y > 0.0 {
        ball.direction.y = -ball.direction.y;
        events.ball_hit_wall = true;
        log::trace!("Ball bounced off the floor at x={}", ball_pos.x);
    }
}

/// Check both paddles against the ball, left first.
///
/// The checks are independent: when both rectangles hold the ball, both
/// bounces apply in the same frame.
pub fn bounce_off_paddles<R: Rng + ?Sized>(
    frame: &Frame,
    ball: &mut BallState,
    arena: &Arena,
    config: &Config,
    rng: &mut R,
    events: &mut Events,
) {
    for side in [Side::Left, Side::Right] {
        let rect = Rect::from_center_size(frame.paddle(side), arena.paddle_size);
        if rect.has_point(frame.ball) && side.faces(ball.direction) {
            paddle_bounce(ball, config, rng);
            events.record_paddle_hit(side);
            log::debug!("Ball hit {:?} paddle, speed now {:.1}", side, ball.speed);
        }
    }
}

/// Send the ball back across the court at a random angle, a little faster
pub fn paddle_bounce<R: Rng + ?Sized>(ball: &mut BallState, config: &Config, rng: &mut R) {
    let spread = config.bounce_spread;
    ball.direction.x = -ball.direction.x;
    ball.direction.y = rng.gen::<f32>() * 2.0 * spread - spread;
    ball.direction = ball.direction.normalize_or_zero();
    ball.speed *= config.paddle_speed_up;
}
