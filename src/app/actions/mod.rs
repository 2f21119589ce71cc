//! Action handlers for user input
//!
//! Split into focused submodules:
//! - `navigation`: cursor, paging, sorting, modals
//! - `fetch`: email fetch task spawning with sequence fencing
//! - `rag`: uploader operations (upload, query, url ingest)
//! - `text`: text-entry modes (search box, filter form, uploader inputs)

mod fetch;
mod navigation;
mod rag;
mod text;

use crate::input::Action;
use crate::view::SortKey;

use super::App;
use super::state::{InputMode, ModalState, View};

impl App {
    pub(crate) fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {} // Handled in event loop
            Action::Up => {
                if self.state.modal.is_help() {
                    self.help_scroll(-1);
                } else {
                    self.state.list.cursor_up();
                }
            }
            Action::Down => {
                if self.state.modal.is_help() {
                    self.help_scroll(1);
                } else {
                    self.state.list.cursor_down(self.state.emails.len());
                }
            }
            Action::NextPage => self.state.list.next_page(self.state.emails.len()),
            Action::PrevPage => self.state.list.prev_page(),
            Action::CyclePageSize => self.state.list.cycle_page_size(self.state.emails.len()),
            Action::SortSender => self.toggle_sort(SortKey::Sender),
            Action::SortRecipient => self.toggle_sort(SortKey::Recipient),
            Action::SortSubject => self.toggle_sort(SortKey::Subject),
            Action::SortReceivedAt => self.toggle_sort(SortKey::ReceivedAt),
            Action::Open => self.open_detail(),
            Action::CloseModal => self.close_modal(),
            Action::EditSearch => self.state.mode = InputMode::Search,
            Action::EditFilters => self.enter_filter_mode(),
            Action::Fetch => self.start_fetch(),
            Action::SwitchView => self.switch_view(),
            Action::UploadStaged => self.upload_staged(),
            Action::Help => self.state.modal = ModalState::Help { scroll: 0 },
        }
    }

    fn switch_view(&mut self) {
        self.state.view = match self.state.view {
            View::Dashboard => View::Uploader,
            View::Uploader => View::Dashboard,
        };
        self.state.mode = InputMode::Normal;
    }
}
