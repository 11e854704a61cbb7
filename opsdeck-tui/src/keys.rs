//! Keybinding definitions for the TUI.
//!
//! `map_key` covers normal-mode input only; while a text input (search,
//! date, chat) is focused the state layer consumes keystrokes directly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextScreen,
    PrevScreen,
    SwitchScreen(usize),
    CycleIndustry,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Select,
    Confirm,
    Cancel,
    OpenSearch,
    EditDate,
    CycleBucket,
    CyclePeriod,
    OpenActions,
    ClearFilters,
    NextTab,
    OpenHelp,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char('d') => Some(Action::EditDate),
        KeyCode::Char('b') => Some(Action::CycleBucket),
        KeyCode::Char('p') => Some(Action::CyclePeriod),
        KeyCode::Char('a') => Some(Action::OpenActions),
        KeyCode::Char('i') => Some(Action::CycleIndustry),
        KeyCode::Char('c') => Some(Action::ClearFilters),
        KeyCode::Char('t') => Some(Action::NextTab),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextScreen),
        KeyCode::BackTab => Some(Action::PrevScreen),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
        KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Char(c) if ('1'..='3').contains(&c) => {
            Some(Action::SwitchScreen(c as usize - '1' as usize))
        }
        _ => None,
    }
}
