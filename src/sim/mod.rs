//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, no wall-clock time
//! - No randomness (the bot is a pure function of the state)
//! - No rendering, threading or platform dependencies

pub mod bot;
pub mod game;
pub mod state;
pub mod tick;

pub use bot::bot_movement;
pub use game::PongGame;
pub use state::{Movement, Player, SimState, Snapshot};
pub use tick::{bounce_angle, tick};
