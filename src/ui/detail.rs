//! Email detail dialog overlay.

use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::api::types::Email;
use crate::app::state::AppState;

use super::format::{avatar_color_index, display_subject, format_received_at, initials};
use super::theme::Theme;
use super::widgets::centered_rect;

pub fn render_detail(frame: &mut Frame, state: &AppState) {
    let Some(email) = state.selected_email() else {
        return;
    };

    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let title = format!(" {} ", display_subject(&email.subject));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(title)
        .title_style(Theme::header());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = detail_lines(email, &state.date_format);
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn detail_lines(email: &Email, date_format: &str) -> Vec<Line<'static>> {
    let field = |label: &'static str, value: String| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{:<11}", label), Theme::header()),
            Span::styled(value, Theme::text()),
        ])
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("({}) ", initials(&email.sender)),
                Theme::avatar(avatar_color_index(&email.sender)),
            ),
            Span::styled("Email Details", Theme::text_secondary()),
        ]),
        Line::from(""),
        field("From:", email.sender.clone()),
        field("To:", email.recipient.clone()),
        field(
            "Received:",
            format_received_at(&email.email_received_at, date_format),
        ),
        field(
            "Date:",
            if email.date.is_empty() {
                "(none)".to_string()
            } else {
                format_received_at(&email.date, date_format)
            },
        ),
        field(
            "Status:",
            if email.unread { "Unread" } else { "Read" }.to_string(),
        ),
        Line::from(""),
        field("Email ID:", email.id.clone()),
        field("Thread ID:", email.thread_id.clone()),
    ];

    if !email.labels.is_empty() {
        lines.push(Line::from(""));
        let mut spans = vec![Span::styled(format!("{:<11}", "Labels:"), Theme::header())];
        for label in &email.labels {
            spans.push(Span::styled(format!("[{}] ", label), Theme::label_chip()));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc/q to close",
        Theme::text_muted(),
    )));

    lines
}
