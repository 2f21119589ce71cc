//! Text-entry handling for the search box, the filter form, and the
//! uploader inputs.

use crate::app::App;
use crate::app::state::{FilterField, InputMode, UploaderField, View};

impl App {
    pub(crate) fn handle_char(&mut self, c: char) {
        if self.state.view == View::Uploader {
            self.state.uploader.focused_input_mut().push(c);
            return;
        }
        match self.state.mode {
            InputMode::Search => self.state.sender_search.push(c),
            InputMode::Filter(field) => self.filter_char(field, c),
            InputMode::Normal => {}
        }
    }

    pub(crate) fn handle_backspace(&mut self) {
        if self.state.view == View::Uploader {
            self.state.uploader.focused_input_mut().pop();
            return;
        }
        match self.state.mode {
            InputMode::Search => {
                self.state.sender_search.pop();
            }
            InputMode::Filter(field) => match field {
                FilterField::Query => {
                    self.state.filters.query.pop();
                }
                FilterField::MaxResults => {
                    self.state.max_results_input.pop();
                }
                FilterField::DateAfter => {
                    self.state.filters.date_after.pop();
                }
                FilterField::DateBefore => {
                    self.state.filters.date_before.pop();
                }
                _ => {}
            },
            InputMode::Normal => {}
        }
    }

    /// Enter in a text-entry context: commit and act.
    pub(crate) fn handle_submit(&mut self) {
        if self.state.view == View::Uploader {
            match self.state.uploader.focus {
                UploaderField::Path => self.state.uploader.stage_path(),
                UploaderField::Prompt => self.submit_query(),
                UploaderField::Url => self.submit_url(),
            }
            return;
        }
        match self.state.mode {
            InputMode::Search => {
                self.state.mode = InputMode::Normal;
                self.start_fetch();
            }
            InputMode::Filter(_) => {
                self.commit_max_results();
                self.state.mode = InputMode::Normal;
                self.start_fetch();
            }
            InputMode::Normal => {}
        }
    }

    pub(crate) fn handle_next_field(&mut self) {
        if self.state.view == View::Uploader {
            self.state.uploader.focus = self.state.uploader.focus.next();
            return;
        }
        if let InputMode::Filter(field) = self.state.mode {
            self.commit_max_results();
            self.state.mode = InputMode::Filter(field.next());
        }
    }

    pub(crate) fn handle_prev_field(&mut self) {
        if self.state.view == View::Uploader {
            // Three fields: two nexts go one back
            self.state.uploader.focus = self.state.uploader.focus.next().next();
            return;
        }
        if let InputMode::Filter(field) = self.state.mode {
            self.commit_max_results();
            self.state.mode = InputMode::Filter(field.prev());
        }
    }

    /// Esc in a text-entry context.
    pub(crate) fn handle_cancel(&mut self) {
        if self.state.view == View::Uploader {
            self.state.view = View::Dashboard;
            return;
        }
        if let InputMode::Filter(_) = self.state.mode {
            // Uncommitted cap digits are discarded
            self.state.max_results_input.clear();
        }
        self.state.mode = InputMode::Normal;
    }

    pub(crate) fn enter_filter_mode(&mut self) {
        self.state.max_results_input = self.state.filters.max_results.to_string();
        self.state.mode = InputMode::Filter(FilterField::Query);
    }

    fn filter_char(&mut self, field: FilterField, c: char) {
        match field {
            FilterField::Query => self.state.filters.query.push(c),
            FilterField::MaxResults => {
                if c.is_ascii_digit() {
                    self.state.max_results_input.push(c);
                }
            }
            FilterField::DateAfter => self.state.filters.date_after.push(c),
            FilterField::DateBefore => self.state.filters.date_before.push(c),
            FilterField::Unread => {
                if c == ' ' {
                    self.state.filters.is_unread = !self.state.filters.is_unread;
                }
            }
            FilterField::Spam => {
                if c == ' ' {
                    self.state.filters.include_spam = !self.state.filters.include_spam;
                }
            }
        }
    }

    /// Parse the cap buffer back into the criteria, keeping the old
    /// value when the buffer is empty or unparseable, and clamping
    /// into range.
    fn commit_max_results(&mut self) {
        if let Ok(value) = self.state.max_results_input.parse::<u32>() {
            self.state.filters.max_results = value;
        }
        self.state.filters.clamp_max_results();
        self.state.max_results_input = self.state.filters.max_results.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::config::Config;
    use crate::session::SessionStore;

    fn app() -> App {
        App::new(Config::default(), SessionStore::in_memory())
    }

    #[tokio::test]
    async fn test_search_box_editing() {
        let mut app = app();
        app.state.mode = InputMode::Search;
        app.handle_char('a');
        app.handle_char('b');
        app.handle_backspace();
        assert_eq!(app.state.sender_search, "a");
    }

    #[tokio::test]
    async fn test_max_results_accepts_digits_only() {
        let mut app = app();
        app.enter_filter_mode();
        app.state.mode = InputMode::Filter(FilterField::MaxResults);
        app.state.max_results_input.clear();
        app.handle_char('5');
        app.handle_char('x');
        app.handle_char('0');
        assert_eq!(app.state.max_results_input, "50");

        app.handle_next_field();
        assert_eq!(app.state.filters.max_results, 50);
    }

    #[tokio::test]
    async fn test_max_results_clamped_on_commit() {
        let mut app = app();
        app.enter_filter_mode();
        app.state.mode = InputMode::Filter(FilterField::MaxResults);
        app.state.max_results_input = "99999".to_string();
        app.handle_next_field();
        assert_eq!(app.state.filters.max_results, 1000);
    }

    #[tokio::test]
    async fn test_checkbox_toggle_with_space() {
        let mut app = app();
        app.state.mode = InputMode::Filter(FilterField::Unread);
        assert!(!app.state.filters.is_unread);
        app.handle_char(' ');
        assert!(app.state.filters.is_unread);
        app.handle_char('y');
        assert!(app.state.filters.is_unread);
    }

    #[tokio::test]
    async fn test_filter_submit_starts_fetch() {
        let mut app = app();
        app.enter_filter_mode();
        app.handle_submit();
        assert_eq!(app.state.mode, InputMode::Normal);
        assert!(app.state.fetch_in_flight);
        assert!(app.state.has_searched);
    }

    #[tokio::test]
    async fn test_uploader_stage_path() {
        let mut app = app();
        app.state.view = View::Uploader;
        for c in "/tmp/doc.pdf".chars() {
            app.handle_char(c);
        }
        app.handle_submit();
        assert_eq!(app.state.uploader.staged.len(), 1);
        assert!(app.state.uploader.path_input.is_empty());
    }

    #[tokio::test]
    async fn test_uploader_esc_returns_to_dashboard() {
        let mut app = app();
        app.state.view = View::Uploader;
        app.handle_cancel();
        assert_eq!(app.state.view, View::Dashboard);
    }
}
