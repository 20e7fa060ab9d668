//! Map terminal key presses to app actions

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,
    /// Type a character into the query
    Insert(char),
    /// Delete the character before the cursor
    Backspace,
    /// Clear the whole query
    ClearInput,
    /// Start a lookup
    Submit,
    /// Request quit
    Quit,
}

pub fn action_for_key(key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('u') if ctrl => Action::ClearInput,
        KeyCode::Char(_) if ctrl => Action::None,
        KeyCode::Char(c) => Action::Insert(c),
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Enter => Action::Submit,
        KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}
