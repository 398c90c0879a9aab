//! Game settings and tuning
//!
//! Loaded from an optional JSON file; every missing field keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation tuning, fixed for the lifetime of a `PongGame`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Paddle movement per tick
    pub platform_speed: f32,
    /// Paddle width as a fraction of the playfield, in (0, 1)
    pub platform_width: f32,
    /// Ball movement per tick
    pub ball_speed: f32,
    /// Steepest bounce angle in radians
    pub ball_max_angle: f32,
    /// Ticks the ball waits after each point (and at kick-off)
    pub freeze_ticks_after_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            platform_speed: PLATFORM_SPEED,
            platform_width: PLATFORM_WIDTH,
            ball_speed: BALL_SPEED,
            ball_max_angle: BALL_MAX_ANGLE,
            freeze_ticks_after_score: FREEZE_TICKS_AFTER_SCORE,
        }
    }
}

impl GameConfig {
    /// Replace values the simulation cannot run with by their defaults
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if !(self.platform_speed.is_finite() && self.platform_speed > 0.0) {
            log::warn!("Invalid platform_speed {}, using {}", self.platform_speed, defaults.platform_speed);
            self.platform_speed = defaults.platform_speed;
        }
        if !(self.platform_width > 0.0 && self.platform_width < 1.0) {
            log::warn!("Invalid platform_width {}, using {}", self.platform_width, defaults.platform_width);
            self.platform_width = defaults.platform_width;
        }
        if !(self.ball_speed.is_finite() && self.ball_speed > 0.0) {
            log::warn!("Invalid ball_speed {}, using {}", self.ball_speed, defaults.ball_speed);
            self.ball_speed = defaults.ball_speed;
        }
        if !(self.ball_max_angle > 0.0 && self.ball_max_angle < std::f32::consts::FRAC_PI_2) {
            log::warn!("Invalid ball_max_angle {}, using {}", self.ball_max_angle, defaults.ball_max_angle);
            self.ball_max_angle = defaults.ball_max_angle;
        }

        self
    }
}

/// Tick driver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Score that ends the match
    pub score_max: u32,
    /// Delay between ticks (milliseconds)
    pub tick_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            score_max: SCORE_MAX,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

/// All tunables, as stored on disk
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameConfig,
    pub session: SessionConfig,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.game = settings.game.validated();
        Ok(settings)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }
}
