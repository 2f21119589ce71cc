//! Cursor movement, sorting, paging, and modal handling.

use crate::app::App;
use crate::app::state::ModalState;
use crate::view::SortKey;

impl App {
    pub(crate) fn toggle_sort(&mut self, key: SortKey) {
        self.state.list.toggle_sort(key);
    }

    /// Open the detail dialog for the row under the cursor.
    pub(crate) fn open_detail(&mut self) {
        self.state.list.select_at_cursor(self.state.emails.len());
        if self.state.list.selected.is_some() {
            self.state.modal = ModalState::Detail;
        }
    }

    /// Close whatever overlay is open. Closing the detail dialog clears
    /// the selection; sort and page state stay as they are.
    pub(crate) fn close_modal(&mut self) {
        if self.state.modal.is_detail() {
            self.state.list.clear_selection();
        }
        self.state.modal = ModalState::None;
    }

    pub(crate) fn help_scroll(&mut self, delta: isize) {
        if let ModalState::Help { ref mut scroll } = self.state.modal {
            let max = crate::ui::help_entry_count().saturating_sub(1);
            *scroll = scroll
                .saturating_add_signed(delta)
                .min(max);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::types::Email;
    use crate::app::state::ModalState;
    use crate::app::{ApiEvent, App};
    use crate::config::Config;
    use crate::session::SessionStore;
    use crate::view::{SortDirection, SortKey};

    fn email(id: &str, received_at: &str) -> Email {
        Email {
            id: id.to_string(),
            thread_id: String::new(),
            sender: format!("{}@example.com", id),
            recipient: String::new(),
            subject: String::new(),
            date: String::new(),
            email_received_at: received_at.to_string(),
            unread: false,
            labels: Vec::new(),
        }
    }

    fn app_with_emails() -> App {
        let mut app = App::new(Config::default(), SessionStore::in_memory());
        app.fetch_seq = 1;
        app.apply_api_event(ApiEvent::EmailsFetched {
            seq: 1,
            result: Ok(vec![
                email("a", "2024-01-01T00:00:00Z"),
                email("b", "2024-02-01T00:00:00Z"),
            ]),
        });
        app
    }

    #[test]
    fn test_open_then_close_detail_clears_selection_only() {
        let mut app = app_with_emails();
        app.state.list.toggle_sort(SortKey::Sender);
        app.state.list.cursor = 1;

        app.open_detail();
        assert_eq!(app.state.modal, ModalState::Detail);
        assert!(app.state.list.selected.is_some());

        app.close_modal();
        assert_eq!(app.state.modal, ModalState::None);
        assert!(app.state.list.selected.is_none());
        // Sort and page untouched by the selection round trip
        assert_eq!(app.state.list.sort_key, SortKey::Sender);
        assert_eq!(app.state.list.direction, SortDirection::Asc);
        assert_eq!(app.state.list.page, 0);
    }

    #[test]
    fn test_open_detail_on_empty_collection_is_noop() {
        let mut app = App::new(Config::default(), SessionStore::in_memory());
        app.open_detail();
        assert_eq!(app.state.modal, ModalState::None);
    }
}
