//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::bot::bot_movement;
use super::state::{Movement, Player, SimState};
use crate::clamp_unit;
use crate::consts::CENTER;
use crate::settings::GameConfig;

/// Advance the game state by one tick
pub fn tick(state: &mut SimState, config: &GameConfig, movement_p1: Movement, movement_p2: Movement) {
    // The bot overrides whatever player 2 asked for
    let movement_p2 = if state.bot {
        bot_movement(state.platform_pos_p2, config.platform_width, state.ball_pos.x)
    } else {
        movement_p2
    };

    move_platform(&mut state.platform_pos_p1, movement_p1, config.platform_speed);
    move_platform(&mut state.platform_pos_p2, movement_p2, config.platform_speed);

    // Paddles keep moving while the ball waits out the freeze
    if state.ball_freeze > 0 {
        state.ball_freeze -= 1;
        return;
    }

    // Side walls reflect, they never score
    state.ball_pos.x += config.ball_speed * state.ball_angle.sin();
    if state.ball_pos.x > 1.0 {
        state.ball_pos.x = 2.0 - state.ball_pos.x;
        state.ball_angle = -state.ball_angle;
    }
    if state.ball_pos.x < 0.0 {
        state.ball_pos.x = -state.ball_pos.x;
        state.ball_angle = -state.ball_angle;
    }

    let dy = config.ball_speed * state.ball_angle.cos();
    if state.ball_dir {
        state.ball_pos.y += dy;
    } else {
        state.ball_pos.y -= dy;
    }

    if state.ball_pos.y > 1.0 {
        defend_edge(state, config, Player::One);
    }
    if state.ball_pos.y < 0.0 {
        defend_edge(state, config, Player::Two);
    }
}

/// The ball crossed `defender`'s edge: bounce off the paddle or concede
///
/// Hitting exactly on the paddle's corner (`|angle| == ball_max_angle`) is
/// still a hit.
fn defend_edge(state: &mut SimState, config: &GameConfig, defender: Player) {
    state.ball_angle = bounce_angle(state.platform_pos(defender), state.ball_pos.x, config);
    if state.ball_angle.abs() > config.ball_max_angle {
        point_scored(state, defender.other());
        state.ball_freeze = config.freeze_ticks_after_score;
        return;
    }

    match defender {
        Player::One => {
            state.ball_pos.y = 2.0 - state.ball_pos.y;
            state.ball_dir = false;
        }
        Player::Two => {
            state.ball_pos.y = -state.ball_pos.y;
            state.ball_dir = true;
        }
    }
}

fn move_platform(pos: &mut f32, movement: Movement, speed: f32) {
    match movement {
        Movement::Left => *pos = clamp_unit(*pos - speed),
        Movement::Right => *pos = clamp_unit(*pos + speed),
        Movement::None => {}
    }
}

/// Angle imparted by a paddle at `platform_pos` to a ball crossing at `ball_x`
///
/// Proportional to the distance from the paddle center, reaching
/// `ball_max_angle` exactly at the paddle's edge. A larger magnitude means the
/// ball passed outside the paddle.
pub fn bounce_angle(platform_pos: f32, ball_x: f32, config: &GameConfig) -> f32 {
    let half_width = config.platform_width / 2.0;
    let left_edge = (1.0 - config.platform_width) * platform_pos;
    let offset = (ball_x - (left_edge + half_width)) / half_width;
    offset * config.ball_max_angle
}

/// Award a point and put everything back in the middle
///
/// The ball is served toward the player who conceded.
fn point_scored(state: &mut SimState, scorer: Player) {
    match scorer {
        Player::One => state.score_p1 += 1,
        Player::Two => state.score_p2 += 1,
    }
    log::debug!(
        "{:?} scored ({} - {})",
        scorer,
        state.score_p1,
        state.score_p2
    );

    state.platform_pos_p1 = CENTER;
    state.platform_pos_p2 = CENTER;
    state.ball_pos.x = CENTER;
    state.ball_pos.y = CENTER;
    state.ball_angle = 0.0;
    state.ball_dir = scorer == Player::Two;
}
