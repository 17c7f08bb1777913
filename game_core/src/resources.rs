use rand::Rng;
use serde::Serialize;

/// Which end of the arena a paddle (or a winner) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    /// Human-controlled paddle on the left
    Player,
    /// Auto-tracking paddle on the right
    Ai,
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub ai: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_player(&mut self) {
        self.player = self.player.saturating_add(1);
    }

    pub fn increment_ai(&mut self) {
        self.ai = self.ai.saturating_add(1);
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.increment_player(),
            Side::Ai => self.increment_ai(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.ai >= win_score {
            Some(Side::Ai)
        } else {
            None
        }
    }
}

/// Source of the serve direction: each call yields -1.0 or 1.0
pub trait SignSource {
    fn sign(&mut self) -> f32;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl SignSource for GameRng {
    fn sign(&mut self) -> f32 {
        if self.0.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub paddle_hit: Option<Side>,
    pub scored: Option<Side>,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
