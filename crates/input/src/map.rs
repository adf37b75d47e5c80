//! Key mapping from terminal events to session commands.

use crate::types::{Command, Difficulty};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input on the difficulty menu.
pub fn map_menu_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('1') | KeyCode::Char('e') | KeyCode::Char('E') => {
            Some(Command::SelectDifficulty(Difficulty::Easy))
        }
        KeyCode::Char('2') | KeyCode::Char('m') | KeyCode::Char('M') => {
            Some(Command::SelectDifficulty(Difficulty::Medium))
        }
        KeyCode::Char('3') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(Command::SelectDifficulty(Difficulty::Hard))
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

/// Map keyboard input while a game is on screen.
///
/// `r` and `m` only mean something once the game is over.
pub fn map_game_key(key: KeyEvent, game_over: bool) -> Option<Command> {
    if game_over {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => return Some(Command::Restart),
            KeyCode::Char('m') | KeyCode::Char('M') => return Some(Command::ReturnToMenu),
            _ => {}
        }
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::RotateCw),

        KeyCode::Char(' ') => Some(Command::HardDrop),
        KeyCode::Esc => Some(Command::ReturnToMenu),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
