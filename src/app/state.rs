//! Application state types
//!
//! All state types live here to maintain clean dependency:
//! UI layer imports from app layer, not vice versa.

use std::path::PathBuf;

use crate::api::types::Email;
use crate::constants::ERROR_TTL_SECS;
use crate::filters::FilterCriteria;
use crate::view::ListView;

/// Top-level screen, toggled with Tab from the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Dashboard,
    Uploader,
}

/// Modal overlay state - only one can be active at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    None,
    /// Email detail dialog for the list view's selection
    Detail,
    Help {
        scroll: usize,
    },
}

impl ModalState {
    pub fn is_detail(&self) -> bool {
        matches!(self, Self::Detail)
    }

    pub fn is_help(&self) -> bool {
        matches!(self, Self::Help { .. })
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Which part of the dashboard receives typed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    /// Editing the sender search box (`/`)
    Search,
    /// Editing the filter form (`f`)
    Filter(FilterField),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterField {
    #[default]
    Query,
    MaxResults,
    DateAfter,
    DateBefore,
    Unread,
    Spam,
}

impl FilterField {
    pub fn next(self) -> Self {
        match self {
            Self::Query => Self::MaxResults,
            Self::MaxResults => Self::DateAfter,
            Self::DateAfter => Self::DateBefore,
            Self::DateBefore => Self::Unread,
            Self::Unread => Self::Spam,
            Self::Spam => Self::Query,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Query => Self::Spam,
            Self::MaxResults => Self::Query,
            Self::DateAfter => Self::MaxResults,
            Self::DateBefore => Self::DateAfter,
            Self::Unread => Self::DateBefore,
            Self::Spam => Self::Unread,
        }
    }

    pub fn is_checkbox(self) -> bool {
        matches!(self, Self::Unread | Self::Spam)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Query => "Sender's Email",
            Self::MaxResults => "Max Results",
            Self::DateAfter => "Date From",
            Self::DateBefore => "Date To",
            Self::Unread => "Unread",
            Self::Spam => "Include Spam",
        }
    }
}

/// Loading, error, and status message state
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub loading: bool,
    pub error: Option<String>,
    pub error_time: Option<std::time::Instant>,
    pub message: String,
}

impl StatusState {
    pub fn set_error(&mut self, error: impl ToString) {
        self.error = Some(error.to_string());
        self.error_time = Some(std::time::Instant::now());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.error_time = None;
    }

    /// Clear error if TTL expired. Returns true if error was cleared.
    pub fn clear_error_if_expired(&mut self) -> bool {
        if let Some(time) = self.error_time
            && time.elapsed().as_secs() >= ERROR_TTL_SECS
        {
            self.clear_error();
            true
        } else {
            false
        }
    }

    pub fn set_message(&mut self, msg: impl ToString) {
        self.message = msg.to_string();
    }
}

/// Which uploader input receives typed characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploaderField {
    #[default]
    Path,
    Prompt,
    Url,
}

impl UploaderField {
    pub fn next(self) -> Self {
        match self {
            Self::Path => Self::Prompt,
            Self::Prompt => Self::Url,
            Self::Url => Self::Path,
        }
    }
}

/// RAG upload/query widget state.
#[derive(Debug, Clone, Default)]
pub struct UploaderState {
    pub focus: UploaderField,
    pub path_input: String,
    pub prompt_input: String,
    pub url_input: String,
    /// Files staged for the next upload
    pub staged: Vec<PathBuf>,
    /// Last answer returned by the query endpoint
    pub answer: Option<String>,
    pub busy: bool,
}

impl UploaderState {
    pub fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            UploaderField::Path => &mut self.path_input,
            UploaderField::Prompt => &mut self.prompt_input,
            UploaderField::Url => &mut self.url_input,
        }
    }

    /// Move the typed path into the staged list.
    pub fn stage_path(&mut self) {
        let path = self.path_input.trim();
        if !path.is_empty() {
            self.staged.push(PathBuf::from(path));
            self.path_input.clear();
        }
    }
}

pub struct AppState {
    /// The fetched collection; replaced wholesale by each fetch
    pub emails: Vec<Email>,
    pub list: ListView,
    pub filters: FilterCriteria,
    /// Independent sender search box (`/`), merged into the fetch query
    pub sender_search: String,
    /// Digit buffer while the Max Results field is being edited
    pub max_results_input: String,
    pub view: View,
    pub mode: InputMode,
    pub modal: ModalState,
    pub status: StatusState,
    pub uploader: UploaderState,
    /// Set by the first fetch, never cleared
    pub has_searched: bool,
    /// Whether a fetch is currently in flight (disables the fetch keys)
    pub fetch_in_flight: bool,
    pub signed_in: bool,
    pub backend_host: String,
    pub date_format: String,
}

impl AppState {
    pub fn new(filters: FilterCriteria, list: ListView) -> Self {
        Self {
            emails: Vec::new(),
            list,
            filters,
            sender_search: String::new(),
            max_results_input: String::new(),
            view: View::default(),
            mode: InputMode::default(),
            modal: ModalState::default(),
            status: StatusState::default(),
            uploader: UploaderState::default(),
            has_searched: false,
            fetch_in_flight: false,
            signed_in: false,
            backend_host: String::new(),
            date_format: "%b %d %H:%M".to_string(),
        }
    }

    /// Replace the collection after a successful fetch, re-establishing
    /// the page invariant. Sort and page otherwise persist.
    pub fn replace_emails(&mut self, emails: Vec<Email>) {
        self.emails = emails;
        self.list.clamp_page(self.emails.len());
    }

    /// Emails visible on the current page, in display order.
    pub fn visible_emails(&self) -> Vec<&Email> {
        let order = self.list.sorted_indices(&self.emails);
        let bounds = self.list.page_bounds(order.len());
        order[bounds].iter().map(|&i| &self.emails[i]).collect()
    }

    /// The record open in the detail dialog, if any.
    pub fn selected_email(&self) -> Option<&Email> {
        let pos = self.list.selected?;
        let order = self.list.sorted_indices(&self.emails);
        order.get(pos).map(|&i| &self.emails[i])
    }

    /// The record under the row cursor, if the page is non-empty.
    pub fn email_at_cursor(&self) -> Option<&Email> {
        let pos = self.list.cursor_position(self.emails.len())?;
        let order = self.list.sorted_indices(&self.emails);
        order.get(pos).map(|&i| &self.emails[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{SortDirection, SortKey};

    fn email(id: &str, sender: &str, received_at: &str) -> Email {
        Email {
            id: id.to_string(),
            thread_id: String::new(),
            sender: sender.to_string(),
            recipient: String::new(),
            subject: String::new(),
            date: String::new(),
            email_received_at: received_at.to_string(),
            unread: false,
            labels: Vec::new(),
        }
    }

    fn state_with(n: usize) -> AppState {
        let mut state = AppState::new(FilterCriteria::default(), ListView::new(10));
        let emails = (0..n)
            .map(|i| {
                email(
                    &format!("{}", i),
                    &format!("s{}@example.com", i),
                    &format!("2024-03-{:02}T00:00:00Z", (i % 28) + 1),
                )
            })
            .collect();
        state.replace_emails(emails);
        state
    }

    #[test]
    fn test_replace_emails_clamps_page() {
        let mut state = state_with(45);
        state.list.page = 4; // rows 40..45
        assert_eq!(state.visible_emails().len(), 5);

        // New fetch returns fewer records; page must snap back
        let fewer = (0..12)
            .map(|i| email(&format!("{}", i), "x@example.com", "2024-01-01T00:00:00Z"))
            .collect();
        state.replace_emails(fewer);
        assert_eq!(state.list.page, 1);
        assert_eq!(state.visible_emails().len(), 2);
    }

    #[test]
    fn test_sort_persists_across_replacement() {
        let mut state = state_with(5);
        state.list.toggle_sort(SortKey::Sender);
        state.replace_emails(vec![email("a", "z@example.com", "2024-01-01T00:00:00Z")]);
        assert_eq!(state.list.sort_key, SortKey::Sender);
        assert_eq!(state.list.direction, SortDirection::Asc);
    }

    #[test]
    fn test_selected_email_follows_sorted_order() {
        let mut state = state_with(0);
        state.replace_emails(vec![
            email("old", "a@example.com", "2024-01-01T00:00:00Z"),
            email("new", "b@example.com", "2024-06-01T00:00:00Z"),
        ]);
        // Default sort is ReceivedAt descending: "new" is first
        state.list.cursor = 0;
        state.list.select_at_cursor(state.emails.len());
        assert_eq!(state.selected_email().unwrap().id, "new");

        state.list.clear_selection();
        assert!(state.selected_email().is_none());
    }
}
