use crate::geometry::Rect;
use crate::params::Params;
use crate::{Ball, Events, Paddle, Side};

/// Check the ball against the paddle it is travelling toward and rebound
/// off it on contact. Returns the side that was hit.
pub fn check_collision(
    ball: &mut Ball,
    player: &Paddle,
    ai: &Paddle,
    events: &mut Events,
) -> Option<Side> {
    // Only the paddle ahead of the ball can be hit
    let (side, paddle) = if ball.vel.x < 0.0 {
        (Side::Player, player)
    } else if ball.vel.x > 0.0 {
        (Side::Ai, ai)
    } else {
        return None;
    };

    let paddle_box = paddle.bounding_box();
    if !swept_collision(ball, &paddle_box) {
        return None;
    }

    rebound(ball, &paddle_box);
    events.paddle_hit = Some(side);
    log::debug!(
        "{:?} paddle hit, ball velocity now ({:.2}, {:.2})",
        side,
        ball.vel.x,
        ball.vel.y
    );
    Some(side)
}

/// Overlap test against the ball's end position, falling back to the
/// rectangle swept since its previous position so that a fast ball cannot
/// skip over a thin paddle.
pub fn swept_collision(ball: &Ball, paddle_box: &Rect) -> bool {
    if ball.bounding_box().overlaps(paddle_box) {
        return true;
    }

    if ball.vel.x == 0.0 && ball.vel.y == 0.0 {
        return false;
    }

    Rect::swept(ball.prev_pos, ball.pos, ball.size, ball.vel).overlaps(paddle_box)
}

/// Reflect the ball off a paddle. The vertical speed depends on where the
/// ball struck relative to the paddle's center.
pub fn rebound(ball: &mut Ball, paddle_box: &Rect) {
    // +1 at the paddle's top edge, -1 at its bottom edge; not clamped
    let relative_intersect =
        (paddle_box.center().y - ball.center().y) / (paddle_box.height / 2.0);

    ball.vel.x = -ball.vel.x;
    ball.vel.y = -relative_intersect * Params::BALL_DEFLECTION;

    // Minimum is applied before the speed-up; zero counts as upward
    if ball.vel.y.abs() < Params::BALL_MIN_SPEED_Y {
        ball.vel.y = if ball.vel.y > 0.0 {
            Params::BALL_MIN_SPEED_Y
        } else {
            -Params::BALL_MIN_SPEED_Y
        };
    }

    ball.vel *= Params::BALL_SPEED_INCREASE;

    // Push ball out of paddle on the side it is now heading to
    if ball.vel.x > 0.0 {
        ball.pos.x = paddle_box.right() + Params::BALL_PADDLE_GAP;
    } else {
        ball.pos.x = paddle_box.left() - ball.size.x - Params::BALL_PADDLE_GAP;
    }
}
