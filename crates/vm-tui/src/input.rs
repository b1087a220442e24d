//! Input handling - convert key events to viewer commands

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use vm_core::Direction;

/// Viewer command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Convert a key event to a viewer command
///
/// wasd and the arrow keys move; q, Esc and Ctrl+C quit.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Move(Direction::Right)),

        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),

        _ => None,
    }
}
