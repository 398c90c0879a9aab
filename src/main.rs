//! Twin Pong headless entry point
//!
//! Plays one full match without a screen: the bot defends the top edge, a
//! noisy autopilot the bottom one.
//!
//! Usage: `twin-pong [settings.json] [seed]`

use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use twin_pong::sim::bot_movement;
use twin_pong::{Movement, PongGame, Settings};

/// Chance per tick that the autopilot ignores the ball
const AUTOPILOT_NOISE: f64 = 0.35;
/// Safety net against a rally that never ends
const MAX_TICKS: u64 = 5_000_000;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0xC0FFEE_u64);

    log::info!("Twin Pong (headless) starting, seed {}", seed);

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut game = PongGame::new(settings.game);
    game.reset_game();
    game.set_bot(true);

    let score_max = settings.session.score_max;
    let mut ticks = 0u64;
    let mut last_score = (0, 0);

    while game.score_p1() < score_max && game.score_p2() < score_max && ticks < MAX_TICKS {
        let movement_p1 = autopilot(&game, &mut rng);
        game.tick(movement_p1, Movement::None);
        ticks += 1;

        let score = (game.score_p1(), game.score_p2());
        if score != last_score {
            log::info!("Tick {}: {} - {}", ticks, score.0, score.1);
            last_score = score;
        }
    }

    if ticks >= MAX_TICKS {
        log::warn!("Stopped after {} ticks without a winner", ticks);
    }

    let winner = if game.score_p1() > game.score_p2() {
        "Player 1 wins!"
    } else {
        "Player 2 wins!"
    };
    println!(
        "{} ({} - {}, {} ticks)",
        winner,
        game.score_p1(),
        game.score_p2(),
        ticks
    );
}

/// Player 1 tracks the ball like the bot does, with random lapses
fn autopilot(game: &PongGame, rng: &mut Pcg32) -> Movement {
    if rng.random_bool(AUTOPILOT_NOISE) {
        return match rng.random_range(0..3) {
            0 => Movement::Left,
            1 => Movement::Right,
            _ => Movement::None,
        };
    }
    bot_movement(
        game.platform_position_p1(),
        game.config().platform_width,
        game.ball_position_x(),
    )
}
