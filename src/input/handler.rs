//! Mode-aware key dispatch.
//!
//! Overlays and text-input modes capture keys before the normal
//! binding table applies.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::state::{AppState, InputMode, View};

use super::keybindings::{Action, normal_binding};

pub enum InputResult {
    Continue,
    Quit,
    Action(Action),
    Char(char),
    Backspace,
    /// Enter pressed in a text-input mode
    Submit,
    /// Tab pressed in a text-input mode (next field)
    NextField,
    /// Shift-Tab in a text-input mode (previous field)
    PrevField,
    Cancel,
}

pub fn handle_input(event: Event, state: &AppState) -> InputResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(key, state),
        _ => InputResult::Continue,
    }
}

fn handle_key(key: KeyEvent, state: &AppState) -> InputResult {
    // Modal overlays swallow everything first
    if state.modal.is_active() {
        return handle_modal(key);
    }

    match state.view {
        View::Uploader => handle_uploader(key),
        View::Dashboard => match state.mode {
            InputMode::Normal => match normal_binding(key) {
                Some(action) => InputResult::Action(action),
                None => InputResult::Continue,
            },
            InputMode::Search | InputMode::Filter(_) => handle_text_entry(key),
        },
    }
}

fn handle_modal(key: KeyEvent) -> InputResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
            InputResult::Action(Action::CloseModal)
        }
        KeyCode::Char('j') | KeyCode::Down => InputResult::Action(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => InputResult::Action(Action::Up),
        _ => InputResult::Continue,
    }
}

fn handle_uploader(key: KeyEvent) -> InputResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('u') => InputResult::Action(Action::UploadStaged),
            KeyCode::Char('c') => InputResult::Quit,
            _ => InputResult::Continue,
        };
    }
    match key.code {
        KeyCode::Esc => InputResult::Cancel,
        KeyCode::Tab => InputResult::NextField,
        KeyCode::BackTab => InputResult::PrevField,
        KeyCode::Enter => InputResult::Submit,
        KeyCode::Backspace => InputResult::Backspace,
        KeyCode::Char(c) => InputResult::Char(c),
        _ => InputResult::Continue,
    }
}

fn handle_text_entry(key: KeyEvent) -> InputResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => InputResult::Quit,
            _ => InputResult::Continue,
        };
    }
    match key.code {
        KeyCode::Esc => InputResult::Cancel,
        KeyCode::Enter => InputResult::Submit,
        KeyCode::Tab | KeyCode::Down => InputResult::NextField,
        KeyCode::BackTab | KeyCode::Up => InputResult::PrevField,
        KeyCode::Backspace => InputResult::Backspace,
        KeyCode::Char(c) => InputResult::Char(c),
        _ => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{FilterField, ModalState};
    use crate::filters::FilterCriteria;
    use crate::view::ListView;

    fn state() -> AppState {
        AppState::new(FilterCriteria::default(), ListView::new(10))
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_detail_modal_captures_sort_keys() {
        let mut state = state();
        state.modal = ModalState::Detail;
        // 's' would be SortSender in normal mode; in a modal it is inert
        assert!(matches!(
            handle_input(press(KeyCode::Char('s')), &state),
            InputResult::Continue
        ));
        assert!(matches!(
            handle_input(press(KeyCode::Esc), &state),
            InputResult::Action(Action::CloseModal)
        ));
    }

    #[test]
    fn test_search_mode_takes_chars() {
        let mut state = state();
        state.mode = InputMode::Search;
        assert!(matches!(
            handle_input(press(KeyCode::Char('a')), &state),
            InputResult::Char('a')
        ));
        assert!(matches!(
            handle_input(press(KeyCode::Enter), &state),
            InputResult::Submit
        ));
    }

    #[test]
    fn test_filter_mode_tab_moves_fields() {
        let mut state = state();
        state.mode = InputMode::Filter(FilterField::Query);
        assert!(matches!(
            handle_input(press(KeyCode::Tab), &state),
            InputResult::NextField
        ));
        assert!(matches!(
            handle_input(press(KeyCode::Esc), &state),
            InputResult::Cancel
        ));
    }

    #[test]
    fn test_normal_mode_uses_binding_table() {
        let state = state();
        assert!(matches!(
            handle_input(press(KeyCode::Char('R')), &state),
            InputResult::Action(Action::Fetch)
        ));
    }
}
