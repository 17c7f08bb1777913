use crate::params::Params;

/// Held state of the logical actions, as polled by the host each frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub restart: bool,
    pub quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// What the host loop should do after input was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    Continue,
    Quit,
}

/// Paddle moves requested this frame, in the order they are applied
pub fn paddle_moves(input: &InputState) -> impl Iterator<Item = f32> {
    let up = input.up.then_some(-Params::PADDLE_STEP);
    let down = input.down.then_some(Params::PADDLE_STEP);
    up.into_iter().chain(down)
}
