//! Rendering layer. Imports state from the app layer, never the other
//! way around.

mod dashboard;
mod detail;
pub mod format;
pub mod theme;
mod uploader;
pub mod widgets;

use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::state::{AppState, ModalState, View};

use theme::Theme;
use widgets::centered_rect;

pub fn render(frame: &mut Frame, state: &AppState) {
    match state.view {
        View::Dashboard => dashboard::render_dashboard(frame, state),
        View::Uploader => uploader::render_uploader(frame, state),
    }

    // Overlays render last so they appear on top
    if state.modal.is_detail() {
        detail::render_detail(frame, state);
    }

    if let ModalState::Help { scroll } = state.modal {
        render_help_popup(frame, scroll);
    }
}

const HELP_ENTRIES: [(&str, &str); 16] = [
    ("j/k, ↓/↑", "move row cursor"),
    ("Enter", "open email detail"),
    ("Esc/q", "close detail"),
    ("n/p", "next/previous page"),
    ("z", "cycle rows per page (5/10/25)"),
    ("s", "sort by sender"),
    ("r", "sort by recipient"),
    ("u", "sort by subject"),
    ("d", "sort by received at"),
    ("/", "edit sender search"),
    ("f", "edit filters"),
    ("R", "fetch emails"),
    ("Tab", "switch dashboard/uploader"),
    ("Ctrl+u", "upload staged files (uploader)"),
    ("?", "this help"),
    ("q", "quit"),
];

fn render_help_popup(frame: &mut Frame, scroll: usize) {
    let area = centered_rect(50, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" Keys ")
        .title_style(Theme::header());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = HELP_ENTRIES
        .iter()
        .skip(scroll)
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {:<12}", key), Theme::help_key()),
                Span::styled(desc.to_string(), Theme::help_desc()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Number of help entries, used to bound help scrolling.
pub fn help_entry_count() -> usize {
    HELP_ENTRIES.len()
}
