//! Key mapping from terminal events to game actions.

use crate::types::ThrustDirection;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Thruster bound to a key, if any.
///
/// Arrow keys, WASD and vim-style (hjkl) are accepted; letters are
/// case-insensitive.
pub fn thrust_for_key(code: KeyCode) -> Option<ThrustDirection> {
    match code {
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(ThrustDirection::Up),
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(ThrustDirection::Left),
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(ThrustDirection::Right),
        _ => None,
    }
}

/// Whether the key starts a fresh round.
pub fn is_restart_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter
    )
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
