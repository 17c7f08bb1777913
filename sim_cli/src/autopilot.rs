//! Scripted stand-in for a human at the keyboard

use game_core::{InputState, Snapshot};

/// Ignore offsets smaller than this to avoid jittering around the ball
const DEADZONE: f32 = 5.0;

/// Anything that can report held keys for the current frame
pub trait InputProvider {
    fn poll(&mut self, snapshot: &Snapshot) -> InputState;
}

/// Chases the ball with the player paddle, restarts finished matches until
/// `matches` have been played, then asks to quit.
pub struct Autopilot {
    matches: u32,
    finished: u32,
    in_game_over: bool,
}

impl Autopilot {
    pub fn new(matches: u32) -> Self {
        Self {
            matches,
            finished: 0,
            in_game_over: false,
        }
    }

    pub fn finished(&self) -> u32 {
        self.finished
    }
}

impl InputProvider for Autopilot {
    fn poll(&mut self, snapshot: &Snapshot) -> InputState {
        if !snapshot.game_over {
            self.in_game_over = false;
            let diff = snapshot.ball.center().y - snapshot.player_paddle.center().y;
            return InputState {
                up: diff < -DEADZONE,
                down: diff > DEADZONE,
                ..InputState::new()
            };
        }

        if !self.in_game_over {
            self.in_game_over = true;
            self.finished += 1;
        }

        if self.finished < self.matches {
            InputState {
                restart: true,
                ..InputState::new()
            }
        } else {
            InputState {
                quit: true,
                ..InputState::new()
            }
        }
    }
}
