//! Game state and core simulation types
//!
//! All state that must be persisted for Resume/determinism lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::CENTER;

/// Requested paddle movement for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Movement {
    #[default]
    None,
    Left,
    Right,
}

/// One of the two players
///
/// Player 1 defends the bottom edge (y = 1), player 2 the top edge (y = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Player 1 paddle position, clamped to [0, 1]
    pub platform_pos_p1: f32,
    /// Player 2 paddle position, clamped to [0, 1]
    pub platform_pos_p2: f32,
    /// Ball position (y may leave [0, 1] mid-tick before the edge check)
    pub ball_pos: Vec2,
    /// Signed deviation from straight vertical travel (radians)
    pub ball_angle: f32,
    /// true = travelling toward player 1's edge
    pub ball_dir: bool,
    /// Ticks left before the ball moves again
    pub ball_freeze: u32,
    pub score_p1: u32,
    pub score_p2: u32,
    /// Player 2 is driven by the bot
    pub bot: bool,
}

impl SimState {
    /// Fresh state for a new match
    pub fn new(freeze_ticks: u32) -> Self {
        Self {
            platform_pos_p1: CENTER,
            platform_pos_p2: CENTER,
            ball_pos: Vec2::splat(CENTER),
            ball_angle: 0.0,
            ball_dir: true,
            ball_freeze: freeze_ticks,
            score_p1: 0,
            score_p2: 0,
            bot: false,
        }
    }

    /// Paddle position of the given player
    pub fn platform_pos(&self, player: Player) -> f32 {
        match player {
            Player::One => self.platform_pos_p1,
            Player::Two => self.platform_pos_p2,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            platform_pos_p1: self.platform_pos_p1,
            platform_pos_p2: self.platform_pos_p2,
            ball_pos: self.ball_pos,
            score_p1: self.score_p1,
            score_p2: self.score_p2,
        }
    }
}

/// Read-only view of everything a renderer draws in one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub platform_pos_p1: f32,
    pub platform_pos_p2: f32,
    pub ball_pos: Vec2,
    pub score_p1: u32,
    pub score_p2: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_centered() {
        let state = SimState::new(120);
        assert_eq!(state.platform_pos_p1, 0.5);
        assert_eq!(state.platform_pos_p2, 0.5);
        assert_eq!(state.ball_pos, Vec2::new(0.5, 0.5));
        assert_eq!(state.ball_freeze, 120);
        assert!(state.ball_dir);
        assert!(!state.bot);
    }

    #[test]
    fn test_player_accessors() {
        let mut state = SimState::new(0);
        state.platform_pos_p2 = 0.25;
        assert_eq!(state.platform_pos(Player::Two), 0.25);
        assert_eq!(state.platform_pos(Player::One), 0.5);
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }
}
