//! Deterministic two-paddle Pong core
//!
//! Ball physics with swept paddle collision, the AI paddle, scoring and the
//! match state machine. No rendering, input polling or I/O: a host feeds
//! `InputState` in and draws the `Snapshot` it gets back.

pub mod components;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controller::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;
pub use systems::{HostSignal, InputState};
