use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events.
///
/// The mapping is context-free; what an action means depends on the active tab or overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Back,
    NextTab,
    PrevTab,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Left,
    Right,
    Select,
    CycleFilter,
    ToggleSort,
    NewEntry,
    DeleteEntry,
    ClearHistory,
    Call,
    Email,
    Website,
    Copy,
    Input(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

pub fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Back,

        (KeyCode::Tab, _) => Action::NextTab,
        (KeyCode::BackTab, _) => Action::PrevTab,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::Left, _) => Action::Left,
        (KeyCode::Right, _) => Action::Right,
        (KeyCode::Enter, _) => Action::Select,

        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::CycleFilter,
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::ToggleSort,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::NewEntry,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::DeleteEntry,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::ClearHistory,
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => Action::Call,
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::Email,
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => Action::Website,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::Copy,

        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Input(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
