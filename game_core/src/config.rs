use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::Params;

/// Match configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub winning_score: u8,
    pub ball_size: f32,
}

/// Reasons a configuration cannot host a match
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("paddle height {paddle} does not fit in arena height {arena}")]
    PaddleTooTall { paddle: f32, arena: f32 },

    #[error("arena width {width} leaves no room between the paddles")]
    ArenaTooNarrow { width: f32 },

    #[error("winning score must be at least 1")]
    ZeroWinningScore,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            winning_score: Params::WIN_SCORE,
            ball_size: Params::BALL_SIZE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the dimensions a host supplied before building a match
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
        ];
        for (field, value) in dims {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.paddle_height > self.arena_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                arena: self.arena_height,
            });
        }

        if self.ai_paddle_x() <= self.player_paddle_x() + self.paddle_width {
            return Err(ConfigError::ArenaTooNarrow {
                width: self.arena_width,
            });
        }

        if self.winning_score == 0 {
            return Err(ConfigError::ZeroWinningScore);
        }

        Ok(())
    }

    /// Left edge of the human-controlled paddle
    pub fn player_paddle_x(&self) -> f32 {
        Params::PADDLE_INSET
    }

    /// Left edge of the AI paddle
    pub fn ai_paddle_x(&self) -> f32 {
        self.arena_width - Params::PADDLE_INSET - self.paddle_width
    }

    /// Top edge that vertically centers a paddle
    pub fn paddle_start_y(&self) -> f32 {
        self.arena_height / 2.0 - self.paddle_height / 2.0
    }

    /// Top-left corner the ball serves from
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }
}
