//! Session flow against the real tick driver

use std::time::{Duration, Instant};

use twin_pong::persistence::keys;
use twin_pong::platform::{JsonFileStore, MemoryStore, PrefStore};
use twin_pong::{GameConfig, GameSession, Player, Record, Screen, SessionConfig, Settings};

fn fast_settings(score_max: u32) -> Settings {
    Settings {
        game: GameConfig {
            freeze_ticks_after_score: 5,
            ..GameConfig::default()
        },
        session: SessionConfig {
            score_max,
            tick_interval_ms: 1,
        },
    }
}

fn wait_until(mut condition: impl FnMut() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !condition() {
        assert!(Instant::now() < deadline, "timed out");
        std::thread::sleep(Duration::from_millis(1));
    }
}

/// Player 2 leads 1 - 0 and player 1's paddle sits in the far corner, so the
/// ball served straight down wins the match for player 2
fn match_point_store() -> MemoryStore {
    let mut record = Record::new();
    record.put_int(keys::GAME_STATE, 1);
    record.put_bool(keys::GAME_PAUSED, true);
    record.put_bool(keys::SINGLE_PLAYER, true);
    record.put_bool(keys::BOT, true);
    record.put_float(keys::PLAT_POS_P1, 0.0);
    record.put_int(keys::BALL_FREEZE, 0);
    record.put_int(keys::SCORE_P2, 1);

    let mut store = MemoryStore::new();
    store.save(&record).unwrap();
    store
}

#[test]
fn test_single_player_enables_bot() {
    let mut session = GameSession::new(fast_settings(10));
    session.start_single_player();
    assert_eq!(session.screen(), Screen::Game);
    assert!(session.is_single_player());
    assert!(session.with_game(|g| g.bot()));
    session.stop();
}

#[test]
fn test_single_player_runs_to_finish() {
    let mut session = GameSession::new(fast_settings(2));
    session.load(&match_point_store());
    assert!(session.resume());
    session.join();

    assert_eq!(session.screen(), Screen::Finish);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.score_p2, 2);
    assert_eq!(snapshot.score_p1, 0);
    assert_eq!(session.winner(), Player::Two);

    session.acknowledge_finish();
    assert_eq!(session.screen(), Screen::Start);
}

#[test]
fn test_save_on_finish_screen_marks_paused() {
    let mut session = GameSession::new(fast_settings(2));
    session.load(&match_point_store());
    assert!(session.resume());
    session.join();
    assert_eq!(session.screen(), Screen::Finish);

    let mut store = MemoryStore::new();
    session.save(&mut store).unwrap();

    let record = store.record();
    assert_eq!(record.get_int(keys::GAME_STATE, -1), 2);
    assert!(record.get_bool(keys::GAME_PAUSED, false));
    assert_eq!(record.get_int(keys::SCORE_P2, -1), 2);
    assert!(session.is_paused());
}

#[test]
fn test_load_stops_running_driver() {
    let mut session = GameSession::new(fast_settings(10));
    session.start_single_player();
    wait_until(|| session.snapshot().ball_pos.y != 0.5);
    assert!(session.is_running());

    session.load(&match_point_store());
    assert!(!session.is_running());
    assert_eq!(session.screen(), Screen::Start);
    assert_eq!(session.snapshot().score_p2, 1);
    assert_eq!(session.snapshot().platform_pos_p1, 0.0);

    let loaded = session.snapshot();
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(session.snapshot(), loaded);
}

#[test]
fn test_multi_player_disables_bot() {
    let mut session = GameSession::new(fast_settings(10));
    session.start_multi_player();
    assert!(!session.is_single_player());
    assert!(!session.with_game(|g| g.bot()));
    session.stop();
}

#[test]
fn test_touch_moves_paddle() {
    let mut session = GameSession::new(fast_settings(10));
    session.start_multi_player();
    session.touch_down(7, 0.9, 0.1);

    wait_until(|| session.snapshot().platform_pos_p2 > 0.5);
    session.touch_up(7);
    session.stop();
    assert!(!session.is_running());
}

#[test]
fn test_back_pauses_and_resume_continues() {
    let mut session = GameSession::new(fast_settings(10));
    session.start_single_player();
    wait_until(|| session.snapshot().ball_pos.y != 0.5);

    session.return_to_start_screen();
    assert_eq!(session.screen(), Screen::Start);
    assert!(session.is_paused());
    assert!(!session.is_running());

    let frozen = session.snapshot();
    std::thread::sleep(Duration::from_millis(10));
    assert_eq!(session.snapshot(), frozen);

    assert!(session.resume());
    assert_eq!(session.screen(), Screen::Game);
    assert!(!session.is_paused());
    wait_until(|| session.snapshot() != frozen);
    session.stop();
}

#[test]
fn test_save_in_game_writes_full_record() {
    let mut session = GameSession::new(fast_settings(10));
    session.start_single_player();
    wait_until(|| session.snapshot().ball_pos.y != 0.5);

    let mut store = MemoryStore::new();
    session.save(&mut store).unwrap();
    assert!(!session.is_running());

    let record = store.record();
    assert_eq!(record.get_int(keys::GAME_STATE, -1), 1);
    assert!(record.get_bool(keys::GAME_PAUSED, false));
    assert!(record.get_bool(keys::SINGLE_PLAYER, false));
    assert!(record.get_bool(keys::BOT, false));
    assert_eq!(
        record.get_float(keys::BALL_POS_Y, 0.5),
        session.snapshot().ball_pos.y
    );
}

#[test]
fn test_save_on_start_screen_writes_flags_only() {
    let mut session = GameSession::new(Settings::default());
    let mut store = MemoryStore::new();
    session.save(&mut store).unwrap();

    let record = store.record();
    assert_eq!(record.len(), 2);
    assert_eq!(record.get_int(keys::GAME_STATE, -1), 0);
    assert!(!record.get_bool(keys::GAME_PAUSED, true));
}

#[test]
fn test_load_restores_behind_start_screen() {
    let mut saved = GameSession::new(fast_settings(10));
    saved.start_multi_player();
    saved.touch_down(1, 0.9, 0.9);
    wait_until(|| saved.snapshot().platform_pos_p1 > 0.6);

    let mut store = MemoryStore::new();
    saved.save(&mut store).unwrap();
    let expected = saved.snapshot();

    let mut restored = GameSession::new(fast_settings(10));
    restored.load(&store);
    assert_eq!(restored.screen(), Screen::Start);
    assert!(restored.is_paused());
    assert!(!restored.is_single_player());
    assert!(!restored.is_running());
    assert_eq!(restored.snapshot(), expected);

    assert!(restored.resume());
    assert_eq!(restored.screen(), Screen::Game);
    restored.stop();
}

#[test]
fn test_load_partial_record_defaults() {
    let mut record = Record::new();
    record.put_int(keys::GAME_STATE, 1);
    record.put_int(keys::SCORE_P2, 3);
    let mut store = MemoryStore::new();
    store.save(&record).unwrap();

    let mut session = GameSession::new(Settings::default());
    session.load(&store);
    assert_eq!(session.screen(), Screen::Start);
    assert!(session.is_single_player());
    // bot reads as true when the key is missing
    assert!(session.with_game(|g| g.bot()));
    assert_eq!(session.snapshot().score_p2, 3);
    assert_eq!(session.with_game(|g| g.state().ball_freeze), 120);
}

#[test]
fn test_load_unreadable_store_keeps_start_screen() {
    let dir = std::env::temp_dir().join(format!("twin-pong-session-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("save.json");
    std::fs::write(&path, "{broken").unwrap();

    let mut session = GameSession::new(Settings::default());
    session.load(&JsonFileStore::new(&path));
    assert_eq!(session.screen(), Screen::Start);
    assert!(!session.is_paused());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_file_store_session_round_trip() {
    let dir = std::env::temp_dir().join(format!("twin-pong-roundtrip-{}", std::process::id()));
    let mut store = JsonFileStore::new(dir.join("save.json"));

    let mut session = GameSession::new(fast_settings(10));
    session.start_single_player();
    wait_until(|| session.snapshot().ball_pos.y != 0.5);
    session.save(&mut store).unwrap();
    let expected = session.with_game(|g| g.state().clone());

    let mut restored = GameSession::new(fast_settings(10));
    restored.load(&store);
    assert_eq!(restored.with_game(|g| g.state().clone()), expected);

    let _ = std::fs::remove_dir_all(&dir);
}
