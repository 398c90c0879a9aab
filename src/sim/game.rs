//! The simulation engine
//!
//! `PongGame` owns the state and its tuning; everything else reads it through
//! accessors or a `Snapshot`.

use glam::Vec2;

use super::state::{Movement, SimState, Snapshot};
use super::tick::tick;
use crate::clamp_unit;
use crate::consts::CENTER;
use crate::persistence::{Record, keys};
use crate::settings::GameConfig;

/// A match between two paddles
#[derive(Debug, Clone)]
pub struct PongGame {
    config: GameConfig,
    state: SimState,
}

impl Default for PongGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl PongGame {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: SimState::new(config.freeze_ticks_after_score),
        }
    }

    /// Resume from an existing state
    pub fn with_state(config: GameConfig, state: SimState) -> Self {
        Self { config, state }
    }

    /// Advance one tick. Player 2's movement is ignored while the bot plays.
    pub fn tick(&mut self, movement_p1: Movement, movement_p2: Movement) {
        tick(&mut self.state, &self.config, movement_p1, movement_p2);
    }

    /// Back to kick-off with a 0 - 0 score. The bot flag is kept.
    pub fn reset_game(&mut self) {
        let bot = self.state.bot;
        self.state = SimState::new(self.config.freeze_ticks_after_score);
        self.state.bot = bot;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn platform_position_p1(&self) -> f32 {
        self.state.platform_pos_p1
    }

    pub fn platform_position_p2(&self) -> f32 {
        self.state.platform_pos_p2
    }

    pub fn ball_position_x(&self) -> f32 {
        self.state.ball_pos.x
    }

    pub fn ball_position_y(&self) -> f32 {
        self.state.ball_pos.y
    }

    pub fn score_p1(&self) -> u32 {
        self.state.score_p1
    }

    pub fn score_p2(&self) -> u32 {
        self.state.score_p2
    }

    pub fn bot(&self) -> bool {
        self.state.bot
    }

    pub fn set_bot(&mut self, bot: bool) {
        self.state.bot = bot;
    }

    /// Write the simulation state into a fresh record
    pub fn serialize(&self) -> Record {
        let mut record = Record::new();
        self.serialize_into(&mut record);
        record
    }

    pub fn serialize_into(&self, record: &mut Record) {
        let s = &self.state;
        record.put_float(keys::PLAT_POS_P1, s.platform_pos_p1);
        record.put_float(keys::PLAT_POS_P2, s.platform_pos_p2);
        record.put_float(keys::BALL_POS_X, s.ball_pos.x);
        record.put_float(keys::BALL_POS_Y, s.ball_pos.y);
        record.put_bool(keys::BALL_DIR, s.ball_dir);
        record.put_float(keys::BALL_ANGLE, s.ball_angle);
        record.put_int(keys::BALL_FREEZE, s.ball_freeze as i64);
        record.put_int(keys::SCORE_P1, s.score_p1 as i64);
        record.put_int(keys::SCORE_P2, s.score_p2 as i64);
        record.put_bool(keys::BOT, s.bot);
    }

    /// Replace the simulation state from a record
    ///
    /// Every key defaults on its own. Paddle positions are clamped so a
    /// hand-edited save cannot break the [0, 1] invariant. A missing `bot` key
    /// reads as true, unlike a freshly constructed game.
    pub fn deserialize(&mut self, record: &Record) {
        self.state = SimState {
            platform_pos_p1: clamp_unit(record.get_float(keys::PLAT_POS_P1, CENTER)),
            platform_pos_p2: clamp_unit(record.get_float(keys::PLAT_POS_P2, CENTER)),
            ball_pos: Vec2::new(
                record.get_float(keys::BALL_POS_X, CENTER),
                record.get_float(keys::BALL_POS_Y, CENTER),
            ),
            ball_angle: record.get_float(keys::BALL_ANGLE, 0.0),
            ball_dir: record.get_bool(keys::BALL_DIR, true),
            ball_freeze: record.get_u32(keys::BALL_FREEZE, self.config.freeze_ticks_after_score),
            score_p1: record.get_u32(keys::SCORE_P1, 0),
            score_p2: record.get_u32(keys::SCORE_P2, 0),
            bot: record.get_bool(keys::BOT, true),
        };
    }
}
