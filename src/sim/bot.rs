//! Reactive bot for player 2
//!
//! Stateless: the intent depends only on the current paddle and ball positions.

use super::state::Movement;

/// Fraction of the paddle width around the target where the bot holds still
pub const BOT_DEAD_ZONE: f32 = 0.3;

/// Compute the bot's movement for this tick
///
/// The ball position is stretched by `1 + platform_width` so the paddle still
/// chases balls near the walls instead of stopping a half-width short.
pub fn bot_movement(platform_pos: f32, platform_width: f32, ball_pos_x: f32) -> Movement {
    let platform_center = platform_pos + platform_width / 2.0;
    let ball_center = ball_pos_x * (1.0 + platform_width);

    if (platform_center - ball_center).abs() < platform_width * BOT_DEAD_ZONE {
        Movement::None
    } else if platform_center < ball_center {
        Movement::Right
    } else {
        Movement::Left
    }
}
