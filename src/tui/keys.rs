//! Key bindings for the tree browser.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tree::Command;

/// Maps a key press to a session command. Releases and unbound keys yield `None`.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char('o') => Some(Command::Open),
            KeyCode::Char('n') => Some(Command::NewNote),
            KeyCode::Char('f') => Some(Command::NewFolder),
            KeyCode::Char('d') => Some(Command::Delete),
            KeyCode::Char('s') => Some(Command::ManageFolders),
            KeyCode::Char('u') => Some(Command::ClearQuery),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Down => Some(Command::MoveDown),
        KeyCode::Up => Some(Command::MoveUp),
        KeyCode::Right => Some(Command::Expand),
        KeyCode::Left => Some(Command::Collapse),
        KeyCode::Enter => Some(Command::Activate),
        KeyCode::Tab | KeyCode::F(1) => Some(Command::Help),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Backspace => Some(Command::Backspace),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Command::InsertChar(c))
        }
        _ => None,
    }
}
