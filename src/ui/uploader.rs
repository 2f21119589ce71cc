//! RAG upload/query widget rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::state::{AppState, UploaderField, UploaderState};

use super::theme::Theme;
use super::widgets::{error_bar, help_bar, spinner_char, status_bar};

pub fn render_uploader(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(3), // Path input
            Constraint::Length(6), // Staged files
            Constraint::Length(3), // URL input
            Constraint::Length(3), // Prompt input
            Constraint::Min(0),    // Answer
            Constraint::Length(1), // Help bar or error
        ])
        .split(frame.area());

    let left = if state.uploader.busy {
        format!("{} RAG Document Uploader", spinner_char())
    } else {
        "RAG Document Uploader".to_string()
    };
    let auth = if state.signed_in { "signed in" } else { "signed out" };
    status_bar(frame, chunks[0], &left, auth);

    let up = &state.uploader;
    render_input(
        frame,
        chunks[1],
        " File path (Enter to stage) ",
        &up.path_input,
        up.focus == UploaderField::Path,
    );
    render_staged(frame, chunks[2], up);
    render_input(
        frame,
        chunks[3],
        " Ingest URL (Enter to submit) ",
        &up.url_input,
        up.focus == UploaderField::Url,
    );
    render_input(
        frame,
        chunks[4],
        " Query (Enter to ask) ",
        &up.prompt_input,
        up.focus == UploaderField::Prompt,
    );
    render_answer(frame, chunks[5], up);

    if let Some(ref error) = state.status.error {
        error_bar(frame, chunks[6], error);
    } else {
        let hints: &[(&str, &str)] = &[
            ("Tab", "next field"),
            ("Enter", "submit"),
            ("Ctrl+u", "upload staged"),
            ("Esc", "dashboard"),
        ];
        help_bar(frame, chunks[6], hints);
    }
}

fn render_input(frame: &mut Frame, area: Rect, title: &str, value: &str, active: bool) {
    let border_style = if active {
        Theme::input_active()
    } else {
        Theme::border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cursor = if active { "│" } else { "" };
    let style = if value.is_empty() {
        Theme::text_muted()
    } else {
        Theme::text()
    };
    frame.render_widget(
        Paragraph::new(format!("{}{}", value, cursor)).style(style),
        inner,
    );
}

fn render_staged(frame: &mut Frame, area: Rect, up: &UploaderState) {
    let title = format!(" Selected files ({}) ", up.staged.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if up.staged.is_empty() {
        frame.render_widget(
            Paragraph::new("Type a path above and press Enter to stage a document.")
                .style(Theme::text_muted()),
            inner,
        );
        return;
    }

    let items: Vec<ListItem> = up
        .staged
        .iter()
        .map(|p| ListItem::new(Line::from(p.display().to_string())).style(Theme::text()))
        .collect();
    frame.render_widget(List::new(items), inner);
}

fn render_answer(frame: &mut Frame, area: Rect, up: &UploaderState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" Query Result ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text: Vec<Line> = match up.answer {
        Some(ref answer) => answer
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect(),
        None => vec![Line::from(Span::styled(
            "No query yet.",
            Theme::text_muted(),
        ))],
    };
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: false }), inner);
}
