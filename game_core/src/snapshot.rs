use serde::Serialize;

use crate::geometry::Rect;
use crate::resources::{Events, Side};

/// Read-only view of a match for drawing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub arena_width: f32,
    pub arena_height: f32,
    pub player_paddle: Rect,
    pub ai_paddle: Rect,
    pub ball: Rect,
    pub player_score: u8,
    pub ai_score: u8,
    pub game_over: bool,
    pub winner: Option<Side>,
    /// What happened during the last tick
    pub events: Events,
}
