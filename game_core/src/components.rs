use glam::Vec2;

use crate::geometry::Rect;
use crate::params::Params;
use crate::resources::SignSource;

/// Paddle - a vertical bar confined to the arena height.
///
/// Change `y` only through `move_by`, `auto_track` or `recenter`; they keep
/// it inside `[0, arena_height - height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32, // fixed after construction
    pub y: f32, // top edge, kept in [0, arena_height - height]
    pub width: f32,
    pub height: f32,
    pub arena_height: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, arena_height: f32) -> Self {
        let mut paddle = Self {
            x,
            y: 0.0,
            width,
            height,
            arena_height,
        };
        paddle.move_by(y);
        paddle
    }

    /// Shift vertically, then clamp back into the arena
    pub fn move_by(&mut self, dy: f32) {
        self.y = (self.y + dy).min(self.max_y()).max(0.0);
    }

    /// Step the paddle's center toward the ball's center, at most
    /// `Params::AI_TRACK_SPEED` per call
    pub fn auto_track(&mut self, ball: &Ball) {
        let diff = ball.center().y - self.bounding_box().center().y;
        let step = diff.clamp(-Params::AI_TRACK_SPEED, Params::AI_TRACK_SPEED);
        self.move_by(step);
    }

    /// Put the paddle back in the middle of its side
    pub fn recenter(&mut self) {
        self.y = 0.0;
        self.move_by(self.arena_height / 2.0 - self.height / 2.0);
    }

    pub fn max_y(&self) -> f32 {
        (self.arena_height - self.height).max(0.0)
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Ball - position is the top-left corner of its box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Position before the most recent move, for swept collision
    pub prev_pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub spawn: Vec2,
    pub arena_height: f32,
}

impl Ball {
    pub fn new(spawn: Vec2, size: f32, arena_height: f32, rng: &mut impl SignSource) -> Self {
        Self {
            pos: spawn,
            prev_pos: spawn,
            vel: serve_velocity(rng),
            size: Vec2::splat(size),
            spawn,
            arena_height,
        }
    }

    /// Back to the spawn point with a fresh random serve direction
    pub fn reset(&mut self, rng: &mut impl SignSource) {
        self.pos = self.spawn;
        self.prev_pos = self.spawn;
        self.vel = serve_velocity(rng);
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

fn serve_velocity(rng: &mut impl SignSource) -> Vec2 {
    let vx = rng.sign() * Params::BALL_SPEED_X;
    let vy = rng.sign() * Params::BALL_SPEED_Y;
    Vec2::new(vx, vy)
}
