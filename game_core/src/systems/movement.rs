use crate::{Ball, Events};

/// Advance the ball one tick and bounce it off the top and bottom walls.
///
/// The position is not pushed back inside the arena: the velocity flips on
/// the tick the wall is crossed and the ball travels back out on the next.
pub fn move_ball(ball: &mut Ball, events: &mut Events) {
    ball.prev_pos = ball.pos;
    ball.pos += ball.vel;

    if ball.pos.y <= 0.0 || ball.pos.y + ball.size.y >= ball.arena_height {
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
        log::debug!("wall bounce at y={:.1}", ball.pos.y);
    }
}
