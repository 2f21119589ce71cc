//! Dashboard key to action mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    NextPage,
    PrevPage,
    CyclePageSize,
    SortSender,
    SortRecipient,
    SortSubject,
    SortReceivedAt,
    Open,
    CloseModal,
    EditSearch,
    EditFilters,
    Fetch,
    SwitchView,
    UploadStaged,
    Help,
}

/// Normal-mode dashboard bindings. Text-input modes bypass this table
/// and are handled in `handler`.
pub fn normal_binding(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('u') => Some(Action::UploadStaged),
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Char('n') | KeyCode::Right => Some(Action::NextPage),
        KeyCode::Char('p') | KeyCode::Left => Some(Action::PrevPage),
        KeyCode::Char('z') => Some(Action::CyclePageSize),
        KeyCode::Char('s') => Some(Action::SortSender),
        KeyCode::Char('r') => Some(Action::SortRecipient),
        KeyCode::Char('u') => Some(Action::SortSubject),
        KeyCode::Char('d') => Some(Action::SortReceivedAt),
        KeyCode::Enter => Some(Action::Open),
        KeyCode::Esc => Some(Action::CloseModal),
        KeyCode::Char('/') => Some(Action::EditSearch),
        KeyCode::Char('f') => Some(Action::EditFilters),
        KeyCode::Char('R') => Some(Action::Fetch),
        KeyCode::Tab => Some(Action::SwitchView),
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    }
}
