//! Terminal falling-block runner (default binary).
//!
//! Single-threaded loop: render the session snapshot, wait for input until the next
//! frame is due, route keys by session state, then advance the fall clock by the
//! real time that passed.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use tui_blocks::config::AppConfig;
use tui_blocks::core::{ScoreStore, SessionController, SessionState};
use tui_blocks::input::{map_game_key, map_menu_key, should_quit};
use tui_blocks::store::JsonFileScoreStore;
use tui_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blocks::types::Command;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    let store = JsonFileScoreStore::open(&config.high_score_path);
    info!(seed, scores = %config.high_score_path.display(), "session starting");
    let mut session = SessionController::new(store, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %format!("{err:#}"), "session aborted");
    }
    result
}

/// Log to a file only: stdout belongs to the terminal UI.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(LevelFilter::from_level(config.log_level))
        .init();
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn run<S: ScoreStore>(
    term: &mut TerminalRenderer,
    session: &mut SessionController<S>,
    config: &AppConfig,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    while session.is_running() {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(command) = command_for(session.state(), key) {
                        session.handle(command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            session.tick(elapsed_ms);
        }
    }

    Ok(())
}

fn command_for(state: SessionState, key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }
    match state {
        SessionState::Menu => map_menu_key(key),
        SessionState::Playing => map_game_key(key, false),
        SessionState::GameOver => map_game_key(key, true),
        SessionState::Quit => None,
    }
}
