//! Game session: screen flow and the tick driver
//!
//! The session owns the shared game behind a lock and runs the tick loop on a
//! dedicated thread. A renderer on another thread reads a `Snapshot` per frame;
//! the lock guarantees it never sees a half-applied tick.
//!
//! Locks (never held together):
//! - `game`: the whole simulation, taken for every tick and every snapshot
//! - `touches`: held fingers, shared by input events and the tick loop
//! - `flow`: screen and pause flags

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use parking_lot::Mutex;

use crate::persistence::{Record, keys};
use crate::platform::{PrefStore, StoreError, TouchTracker};
use crate::settings::{SessionConfig, Settings};
use crate::sim::{Player, PongGame, Snapshot};

/// What the player is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Start,
    Game,
    Finish,
}

impl Screen {
    pub fn to_int(self) -> i64 {
        match self {
            Screen::Start => 0,
            Screen::Game => 1,
            Screen::Finish => 2,
        }
    }

    /// Unknown values map to the start screen
    pub fn from_int(value: i64) -> Self {
        match value {
            1 => Screen::Game,
            2 => Screen::Finish,
            _ => Screen::Start,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Flow {
    screen: Screen,
    paused: bool,
    single_player: bool,
}

struct Shared {
    game: Mutex<PongGame>,
    touches: Mutex<TouchTracker>,
    flow: Mutex<Flow>,
}

/// A running tick loop
struct Driver {
    stop_tx: Sender<()>,
    handle: thread::JoinHandle<()>,
}

/// One player's (or two players') game, from menu to final score
pub struct GameSession {
    shared: Arc<Shared>,
    config: SessionConfig,
    driver: Option<Driver>,
}

impl GameSession {
    pub fn new(settings: Settings) -> Self {
        let shared = Shared {
            game: Mutex::new(PongGame::new(settings.game)),
            touches: Mutex::new(TouchTracker::new()),
            flow: Mutex::new(Flow {
                screen: Screen::Start,
                paused: false,
                single_player: true,
            }),
        };
        Self {
            shared: Arc::new(shared),
            config: settings.session,
            driver: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.shared.flow.lock().screen
    }

    /// A game was interrupted and can be resumed
    pub fn is_paused(&self) -> bool {
        self.shared.flow.lock().paused
    }

    pub fn is_single_player(&self) -> bool {
        self.shared.flow.lock().single_player
    }

    /// Everything a frame needs, read under one lock
    pub fn snapshot(&self) -> Snapshot {
        self.shared.game.lock().snapshot()
    }

    /// Run `f` with the game locked, for reads that must be consistent
    pub fn with_game<R>(&self, f: impl FnOnce(&PongGame) -> R) -> R {
        f(&*self.shared.game.lock())
    }

    /// Leader of the current (or final) score; ties go to player 2
    pub fn winner(&self) -> Player {
        let snapshot = self.snapshot();
        if snapshot.score_p1 > snapshot.score_p2 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// New game against the bot
    pub fn start_single_player(&mut self) {
        self.start_game(true);
    }

    /// New game, both paddles on one screen
    pub fn start_multi_player(&mut self) {
        self.start_game(false);
    }

    fn start_game(&mut self, single_player: bool) {
        self.stop();
        self.shared.touches.lock().clear();
        {
            let mut game = self.shared.game.lock();
            game.reset_game();
            game.set_bot(single_player);
        }
        {
            let mut flow = self.shared.flow.lock();
            flow.screen = Screen::Game;
            flow.paused = false;
            flow.single_player = single_player;
        }
        log::info!(
            "Starting {} game",
            if single_player { "single player" } else { "multi player" }
        );
        self.spawn_driver();
    }

    /// Continue an interrupted game. Returns false if nothing was paused.
    pub fn resume(&mut self) -> bool {
        if !self.is_paused() {
            return false;
        }
        self.stop();
        self.shared.touches.lock().clear();
        {
            let mut flow = self.shared.flow.lock();
            flow.screen = Screen::Game;
            flow.paused = false;
        }
        log::info!("Resuming game");
        self.spawn_driver();
        true
    }

    /// Back button: leave the game (pausing it if one was running)
    pub fn return_to_start_screen(&mut self) {
        self.stop();
        let mut flow = self.shared.flow.lock();
        if flow.screen == Screen::Game {
            flow.paused = true;
        }
        flow.screen = Screen::Start;
    }

    /// Dismiss the final score
    pub fn acknowledge_finish(&mut self) {
        let mut flow = self.shared.flow.lock();
        if flow.screen == Screen::Finish {
            flow.screen = Screen::Start;
        }
    }

    /// Finger down at normalized screen coordinates. Ignored outside a game.
    pub fn touch_down(&self, id: u64, x: f32, y: f32) {
        if self.screen() == Screen::Game {
            self.shared.touches.lock().touch_down(id, x, y);
        }
    }

    pub fn touch_up(&self, id: u64) {
        if self.screen() == Screen::Game {
            self.shared.touches.lock().touch_up(id);
        }
    }

    /// The tick loop is currently running
    pub fn is_running(&self) -> bool {
        self.driver
            .as_ref()
            .is_some_and(|driver| !driver.handle.is_finished())
    }

    /// Stop the tick loop and wait for it to exit
    pub fn stop(&mut self) {
        if let Some(driver) = self.driver.take() {
            // The loop may already have ended on its own
            let _ = driver.stop_tx.send(());
            if driver.handle.join().is_err() {
                log::error!("Tick driver panicked");
            }
        }
    }

    /// Wait for the tick loop to end by itself (someone reached the max score)
    pub fn join(&mut self) {
        if let Some(driver) = self.driver.take() {
            if driver.handle.join().is_err() {
                log::error!("Tick driver panicked");
            }
            drop(driver.stop_tx);
        }
    }

    fn spawn_driver(&mut self) {
        let (stop_tx, stop_rx) = crossbeam_channel::bounded(1);
        let shared = Arc::clone(&self.shared);
        let config = self.config;
        let handle = thread::spawn(move || run_loop(shared, config, stop_rx));
        self.driver = Some(Driver { stop_tx, handle });
    }

    /// Persist the session
    ///
    /// Screen and pause flags are always written. A game in progress or
    /// finished (or an already paused one) is written in full and marked
    /// paused. The tick loop is stopped either way.
    pub fn save(&mut self, store: &mut impl PrefStore) -> Result<(), StoreError> {
        self.stop();

        let mut record = Record::new();
        let in_game = {
            let mut flow = self.shared.flow.lock();
            record.put_int(keys::GAME_STATE, flow.screen.to_int());
            record.put_bool(keys::GAME_PAUSED, flow.paused);

            let in_game = matches!(flow.screen, Screen::Game | Screen::Finish) || flow.paused;
            if in_game {
                record.put_bool(keys::SINGLE_PLAYER, flow.single_player);
                record.put_bool(keys::GAME_PAUSED, true);
                flow.paused = true;
            }
            in_game
        };
        if in_game {
            self.shared.game.lock().serialize_into(&mut record);
        }

        store.save(&record)?;
        log::info!("Session saved ({} keys)", record.len());
        Ok(())
    }

    /// Restore the session
    ///
    /// Never fails: an unreadable store loads as empty. A saved game is
    /// restored behind the start screen, ready for `resume`.
    pub fn load(&mut self, store: &impl PrefStore) {
        self.stop();

        let record = store.load().unwrap_or_else(|e| {
            log::warn!("Could not read saved session: {}", e);
            Record::new()
        });

        let screen = Screen::from_int(record.get_int(keys::GAME_STATE, 0));
        let paused = record.get_bool(keys::GAME_PAUSED, false);
        let saved_game = matches!(screen, Screen::Game | Screen::Finish) || paused;

        {
            let mut flow = self.shared.flow.lock();
            flow.screen = screen;
            flow.paused = paused;
            if saved_game {
                flow.screen = Screen::Start;
                flow.single_player = record.get_bool(keys::SINGLE_PLAYER, true);
            }
        }
        if saved_game {
            self.shared.game.lock().deserialize(&record);
            log::info!("Loaded saved game");
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_loop(shared: Arc<Shared>, config: SessionConfig, stop_rx: Receiver<()>) {
    let interval = Duration::from_millis(config.tick_interval_ms);
    log::debug!("Tick driver started ({:?} per tick)", interval);

    loop {
        let snapshot = shared.game.lock().snapshot();
        if snapshot.score_p1 >= config.score_max || snapshot.score_p2 >= config.score_max {
            shared.flow.lock().screen = Screen::Finish;
            log::info!(
                "Match finished ({} - {})",
                snapshot.score_p1,
                snapshot.score_p2
            );
            return;
        }

        let (movement_p1, movement_p2) = shared.touches.lock().resolve();
        shared.game.lock().tick(movement_p1, movement_p2);

        match stop_rx.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                log::debug!("Tick driver stopped");
                return;
            }
        }
    }
}
