//! Save/load persistence
//!
//! Features:
//! - Typed key-value `Record` (one per saved game)
//! - Per-key defaults, so a partial save still loads
//! - Storage backends live in `platform::storage`

pub mod record;

pub use record::{PrefValue, Record};

/// Record keys
pub mod keys {
    /// Screen at save time (0 = start, 1 = game, 2 = finish)
    pub const GAME_STATE: &str = "game_state";
    pub const GAME_PAUSED: &str = "game_paused";
    pub const SINGLE_PLAYER: &str = "single_player";

    pub const PLAT_POS_P1: &str = "plat_pos_p1";
    pub const PLAT_POS_P2: &str = "plat_pos_p2";
    pub const BALL_POS_X: &str = "ball_pos_x";
    pub const BALL_POS_Y: &str = "ball_pos_y";
    pub const BALL_DIR: &str = "ball_dir";
    pub const BALL_ANGLE: &str = "ball_angle";
    pub const BALL_FREEZE: &str = "ball_freeze";
    pub const SCORE_P1: &str = "score_p1";
    pub const SCORE_P2: &str = "score_p2";
    pub const BOT: &str = "bot";
}
