//! Session controller - menu, play, game over, quit
//!
//! The controller owns the score store for the whole session. While a game is running
//! the store is lent to that game's engine by value and handed back when the game is
//! left (return to menu, restart, quit).
//!
//! ```
//! use tui_blocks_core::{MemoryScoreStore, SessionController, SessionState};
//! use tui_blocks_core::types::{Command, Difficulty};
//!
//! let mut session = SessionController::new(MemoryScoreStore::new(), 7);
//! assert_eq!(session.state(), SessionState::Menu);
//!
//! session.handle(Command::SelectDifficulty(Difficulty::Hard));
//! assert_eq!(session.state(), SessionState::Playing);
//!
//! session.handle(Command::ReturnToMenu);
//! assert_eq!(session.state(), SessionState::Menu);
//!
//! session.handle(Command::Quit);
//! assert!(!session.is_running());
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::engine::GameEngine;
use crate::score_store::ScoreStore;
use crate::snapshot::{MenuSnapshot, SessionSnapshot};
use crate::types::{Command, Difficulty};

/// Coarse session state, as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Menu,
    Playing,
    GameOver,
    Quit,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Menu => "menu",
            SessionState::Playing => "playing",
            SessionState::GameOver => "gameOver",
            SessionState::Quit => "quit",
        }
    }
}

#[derive(Debug)]
enum Screen<S> {
    Menu(S),
    Playing(GameEngine<S>),
    Quit(S),
    /// Only observable while a transition is moving the store between screens.
    Switching,
}

#[derive(Debug)]
pub struct SessionController<S: ScoreStore> {
    screen: Screen<S>,
    seeds: StdRng,
}

impl<S: ScoreStore> SessionController<S> {
    /// New session showing the menu. `seed` drives the seeds of every game started.
    pub fn new(store: S, seed: u64) -> Self {
        Self {
            screen: Screen::Menu(store),
            seeds: StdRng::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> SessionState {
        match &self.screen {
            Screen::Menu(_) | Screen::Switching => SessionState::Menu,
            Screen::Playing(engine) if engine.game_over() => SessionState::GameOver,
            Screen::Playing(_) => SessionState::Playing,
            Screen::Quit(_) => SessionState::Quit,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() != SessionState::Quit
    }

    pub fn store(&self) -> Option<&S> {
        match &self.screen {
            Screen::Menu(store) | Screen::Quit(store) => Some(store),
            Screen::Playing(engine) => Some(engine.store()),
            Screen::Switching => None,
        }
    }

    /// Engine of the game on screen, if any.
    pub fn engine(&self) -> Option<&GameEngine<S>> {
        match &self.screen {
            Screen::Playing(engine) => Some(engine),
            _ => None,
        }
    }

    pub fn engine_mut(&mut self) -> Option<&mut GameEngine<S>> {
        match &mut self.screen {
            Screen::Playing(engine) => Some(engine),
            _ => None,
        }
    }

    /// Route one command according to the current state.
    ///
    /// Returns true if the command had an effect.
    pub fn handle(&mut self, command: Command) -> bool {
        let state = self.state();
        let handled = match (state, command) {
            (SessionState::Quit, _) => false,
            (_, Command::Quit) => self.quit(),
            (SessionState::Menu, Command::SelectDifficulty(difficulty)) => {
                self.start_game(difficulty)
            }
            (SessionState::Menu, _) => false,
            (_, Command::ReturnToMenu) => self.return_to_menu(),
            (SessionState::GameOver, Command::Restart) => self.restart(),
            (_, command) if command.is_gameplay() => self
                .engine_mut()
                .map(|engine| engine.apply(command))
                .unwrap_or(false),
            _ => false,
        };
        if !handled {
            debug!(command = command.as_str(), state = state.as_str(), "command ignored");
        }
        handled
    }

    /// Forward elapsed time to the running game. No-op elsewhere.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.engine_mut()
            .map(|engine| engine.tick(elapsed_ms))
            .unwrap_or(false)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        match &self.screen {
            Screen::Menu(store) => SessionSnapshot::Menu(MenuSnapshot::from_store(store)),
            Screen::Playing(engine) => SessionSnapshot::Playing(engine.snapshot()),
            Screen::Quit(_) => SessionSnapshot::Quit,
            Screen::Switching => SessionSnapshot::Quit,
        }
    }

    /// End the session and hand the store back.
    pub fn into_store(self) -> Option<S> {
        match self.screen {
            Screen::Menu(store) | Screen::Quit(store) => Some(store),
            Screen::Playing(engine) => Some(engine.into_store()),
            Screen::Switching => None,
        }
    }

    fn start_game(&mut self, difficulty: Difficulty) -> bool {
        let seed = self.seeds.gen::<u64>();
        self.transition(|screen| match screen {
            Screen::Menu(store) => Screen::Playing(GameEngine::new(difficulty, seed, store)),
            other => other,
        });
        info!(difficulty = difficulty.as_str(), seed, "game started");
        true
    }

    fn restart(&mut self) -> bool {
        let seed = self.seeds.gen::<u64>();
        self.transition(|screen| match screen {
            Screen::Playing(engine) => {
                let difficulty = engine.difficulty();
                Screen::Playing(GameEngine::new(difficulty, seed, engine.into_store()))
            }
            other => other,
        });
        info!(seed, "game restarted");
        true
    }

    fn return_to_menu(&mut self) -> bool {
        self.transition(|screen| match screen {
            Screen::Playing(engine) => Screen::Menu(engine.into_store()),
            other => other,
        });
        info!("returned to menu");
        true
    }

    fn quit(&mut self) -> bool {
        self.transition(|screen| match screen {
            Screen::Menu(store) | Screen::Quit(store) => Screen::Quit(store),
            Screen::Playing(engine) => Screen::Quit(engine.into_store()),
            Screen::Switching => Screen::Switching,
        });
        info!("session quit");
        true
    }

    fn transition(&mut self, f: impl FnOnce(Screen<S>) -> Screen<S>) {
        let screen = std::mem::replace(&mut self.screen, Screen::Switching);
        self.screen = f(screen);
    }
}
