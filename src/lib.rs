//! Twin Pong - a two-paddle touch Pong game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, scoring, bot)
//! - `platform`: Touch input resolution and key-value storage
//! - `persistence`: Typed save records
//! - `session`: Screen flow and the tick driver thread
//! - `settings`: Data-driven game tuning

pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use persistence::Record;
pub use session::{GameSession, Screen};
pub use settings::{GameConfig, SessionConfig, Settings};
pub use sim::{Movement, Player, PongGame, SimState, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Fixed delay between simulation ticks (milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 16;
    /// First player to reach this score wins
    pub const SCORE_MAX: u32 = 10;

    /// Paddle movement per tick (fraction of the movable axis)
    pub const PLATFORM_SPEED: f32 = 0.026;
    /// Paddle width (fraction of the playfield width)
    pub const PLATFORM_WIDTH: f32 = 0.22;

    /// Ball movement per tick
    pub const BALL_SPEED: f32 = 0.03;
    /// Steepest bounce angle (radians). Anything beyond is a miss.
    pub const BALL_MAX_ANGLE: f32 = 1.48;
    /// Ticks the ball stays put after a point (~2 seconds at 16 ms)
    pub const FREEZE_TICKS_AFTER_SCORE: u32 = 120;

    /// Rest position of paddles and ball
    pub const CENTER: f32 = 0.5;
}

/// Clamp a normalized position to [0, 1]
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}
