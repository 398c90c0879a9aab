//! Touch input resolution
//!
//! Each held finger is remembered with the side and player it was assigned at
//! touch-down. Moving the finger across the midline changes nothing.

use crate::sim::{Movement, Player};

/// A finger currently on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Touch {
    pub id: u64,
    pub side: Movement,
    pub player: Player,
}

impl Touch {
    /// Classify a touch-down at normalized screen coordinates
    ///
    /// Right half moves right, left half moves left. The bottom half belongs to
    /// player 1, the top half to player 2.
    pub fn at(id: u64, x: f32, y: f32) -> Self {
        let side = if x > 0.5 { Movement::Right } else { Movement::Left };
        let player = if y > 0.5 { Player::One } else { Player::Two };
        Self { id, side, player }
    }
}

/// Held touches, oldest first
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    touches: Vec<Touch>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a finger. Reusing a held id replaces that finger.
    pub fn touch_down(&mut self, id: u64, x: f32, y: f32) {
        self.touches.retain(|t| t.id != id);
        let touch = Touch::at(id, x, y);
        log::debug!("Touch down {:?}", touch);
        self.touches.push(touch);
    }

    pub fn touch_up(&mut self, id: u64) {
        let before = self.touches.len();
        self.touches.retain(|t| t.id != id);
        if self.touches.len() == before {
            log::debug!("Touch up for unknown id {}", id);
        }
    }

    pub fn clear(&mut self) {
        self.touches.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    pub fn touches(&self) -> &[Touch] {
        &self.touches
    }

    /// Intent of one player: the side of their most recent touch, if any
    pub fn movement(&self, player: Player) -> Movement {
        self.touches
            .iter()
            .rev()
            .find(|t| t.player == player)
            .map(|t| t.side)
            .unwrap_or(Movement::None)
    }

    /// Intents for (player 1, player 2) this tick
    pub fn resolve(&self) -> (Movement, Movement) {
        (self.movement(Player::One), self.movement(Player::Two))
    }
}
