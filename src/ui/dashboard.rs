//! Email dashboard rendering: filter panel, sortable table, pagination
//! footer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::app::state::{AppState, FilterField, InputMode};
use crate::constants::MIN_WIDE_TABLE_WIDTH;
use crate::view::SortKey;

use super::format::{avatar_color_index, display_subject, format_received_at, initials};
use super::theme::Theme;
use super::widgets::{error_bar, help_bar, spinner_char, status_bar, truncate_string};

pub fn render_dashboard(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(5), // Filter panel
            Constraint::Min(0),    // Table
            Constraint::Length(1), // Pagination footer
            Constraint::Length(1), // Help bar or error
        ])
        .split(frame.area());

    render_status_bar(frame, chunks[0], state);
    render_filter_panel(frame, chunks[1], state);
    render_table(frame, chunks[2], state);
    render_footer(frame, chunks[3], state);

    if let Some(ref error) = state.status.error {
        error_bar(frame, chunks[4], error);
    } else {
        let hints: &[(&str, &str)] = match state.mode {
            InputMode::Search => &[("Type", "sender"), ("Enter", "search"), ("Esc", "cancel")],
            InputMode::Filter(_) => &[
                ("Tab", "next field"),
                ("Space", "toggle"),
                ("Enter", "search"),
                ("Esc", "cancel"),
            ],
            InputMode::Normal => &[
                ("j/k", "nav"),
                ("Enter", "open"),
                ("/", "sender"),
                ("f", "filters"),
                ("R", "refresh"),
                ("Tab", "uploader"),
                ("?", "help"),
            ],
        };
        help_bar(frame, chunks[4], hints);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let left = if state.status.loading {
        format!("{} Email Inbox · {}", spinner_char(), state.backend_host)
    } else {
        format!("Email Inbox · {}", state.backend_host)
    };
    let auth = if state.signed_in { "signed in" } else { "signed out" };
    let right = if state.status.message.is_empty() {
        format!("{} emails · {}", state.emails.len(), auth)
    } else {
        format!("{} · {}", state.status.message, auth)
    };
    status_bar(frame, area, &left, &right);
}

fn render_filter_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" Filters & Search ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Sender search box
            Constraint::Length(1), // Query + cap + checkboxes
            Constraint::Length(1), // Date bounds
        ])
        .split(inner);

    // Sender search box
    let search_active = state.mode == InputMode::Search;
    let cursor = if search_active { "│" } else { "" };
    let search_style = if search_active {
        Theme::input_active()
    } else if state.sender_search.is_empty() {
        Theme::text_muted()
    } else {
        Theme::text()
    };
    let search_text = if state.sender_search.is_empty() && !search_active {
        " / Search by sender email...".to_string()
    } else {
        format!(" / {}{}", state.sender_search, cursor)
    };
    frame.render_widget(Paragraph::new(search_text).style(search_style), rows[0]);

    // Filter form fields
    let active_field = match state.mode {
        InputMode::Filter(field) => Some(field),
        _ => None,
    };

    let max_results_display = if active_field == Some(FilterField::MaxResults) {
        state.max_results_input.clone()
    } else {
        state.filters.max_results.to_string()
    };

    let line2 = Line::from(vec![
        field_span(FilterField::Query, &state.filters.query, active_field),
        Span::raw("  "),
        field_span(FilterField::MaxResults, &max_results_display, active_field),
        Span::raw("  "),
        checkbox_span(FilterField::Unread, state.filters.is_unread, active_field),
        Span::raw("  "),
        checkbox_span(FilterField::Spam, state.filters.include_spam, active_field),
    ]);
    frame.render_widget(Paragraph::new(line2), rows[1]);

    let line3 = Line::from(vec![
        field_span(FilterField::DateAfter, &state.filters.date_after, active_field),
        Span::raw("  "),
        field_span(
            FilterField::DateBefore,
            &state.filters.date_before,
            active_field,
        ),
    ]);
    frame.render_widget(Paragraph::new(line3), rows[2]);
}

fn field_span<'a>(
    field: FilterField,
    value: &str,
    active: Option<FilterField>,
) -> Span<'a> {
    let is_active = active == Some(field);
    let cursor = if is_active { "│" } else { "" };
    let style = if is_active {
        Theme::input_active()
    } else if value.is_empty() {
        Theme::text_muted()
    } else {
        Theme::text()
    };
    Span::styled(format!(" {}: {}{}", field.label(), value, cursor), style)
}

fn checkbox_span<'a>(field: FilterField, checked: bool, active: Option<FilterField>) -> Span<'a> {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if active == Some(field) {
        Theme::input_active()
    } else {
        Theme::text_secondary()
    };
    Span::styled(format!(" {} {}", mark, field.label()), style)
}

fn render_table(frame: &mut Frame, area: Rect, state: &AppState) {
    // Pre-search placeholder, mirrors the original dashboard's empty
    // landing state
    if !state.has_searched {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Enter your search criteria",
                Theme::text_secondary(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Use the filters above, then press R to search.",
                Theme::text_muted(),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
        return;
    }

    if state.status.loading && state.emails.is_empty() {
        let msg = format!("{} Loading emails...", spinner_char());
        frame.render_widget(
            Paragraph::new(msg)
                .style(Theme::text_secondary())
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    if state.emails.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("No emails found", Theme::text_secondary())),
            Line::from(""),
            Line::from(Span::styled(
                "Try adjusting your search criteria or filters.",
                Theme::text_muted(),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
        return;
    }

    let wide = area.width >= MIN_WIDE_TABLE_WIDTH;
    let visible = state.visible_emails();
    let n = state.emails.len();
    let cursor_row = state.list.cursor;

    let header = header_row(state, wide);

    let mut rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(i, email)| {
            let selected = i == cursor_row;
            email_row(email, i, state, selected, wide)
        })
        .collect();

    // Pad a short last page with blank rows so the table keeps its
    // row budget
    for _ in 0..state.list.empty_rows(n) {
        let blanks = if wide { 7 } else { 5 };
        rows.push(Row::new(vec![Cell::from(""); blanks]));
    }

    let widths: Vec<Constraint> = if wide {
        vec![
            Constraint::Length(4),      // #
            Constraint::Percentage(24), // Sender
            Constraint::Percentage(18), // Recipient
            Constraint::Percentage(26), // Subject
            Constraint::Length(14),     // Received At
            Constraint::Length(7),      // Status
            Constraint::Percentage(14), // Labels
        ]
    } else {
        vec![
            Constraint::Length(4),
            Constraint::Percentage(34),
            Constraint::Percentage(40),
            Constraint::Length(14),
            Constraint::Length(7),
        ]
    };

    let table = Table::new(rows, widths).header(header);
    frame.render_widget(table, area);
}

fn header_row<'a>(state: &AppState, wide: bool) -> Row<'a> {
    let sort_cell = |key: SortKey| -> Cell<'a> {
        let active = state.list.sort_key == key;
        let style = if active {
            Theme::header_active()
        } else {
            Theme::header()
        };
        let text = if active {
            format!("{} {}", key.label(), state.list.direction.indicator())
        } else {
            key.label().to_string()
        };
        Cell::from(text).style(style)
    };

    let mut cells = vec![
        Cell::from("#").style(Theme::header()),
        sort_cell(SortKey::Sender),
    ];
    if wide {
        cells.push(sort_cell(SortKey::Recipient));
    }
    cells.push(sort_cell(SortKey::Subject));
    cells.push(sort_cell(SortKey::ReceivedAt));
    cells.push(Cell::from("Status").style(Theme::header()));
    if wide {
        cells.push(Cell::from("Labels").style(Theme::header()));
    }
    Row::new(cells)
}

fn email_row<'a>(
    email: &crate::api::types::Email,
    row_index: usize,
    state: &AppState,
    selected: bool,
    wide: bool,
) -> Row<'a> {
    let base = if selected {
        Theme::selected()
    } else {
        ratatui::style::Style::default()
    };
    let text_style = if selected {
        if email.unread {
            Theme::selected_bold()
        } else {
            Theme::selected()
        }
    } else if email.unread {
        Theme::text_unread()
    } else {
        Theme::text_secondary()
    };

    let number = state.list.page * state.list.page_size + row_index + 1;

    let sender_line = Line::from(vec![
        Span::styled(
            format!("({})", initials(&email.sender)),
            Theme::avatar(avatar_color_index(&email.sender)),
        ),
        Span::raw(" "),
        Span::styled(email.sender.clone(), text_style),
    ]);

    let mut cells = vec![
        Cell::from(format!("{}", number)).style(Theme::text_muted()),
        Cell::from(sender_line),
    ];
    if wide {
        cells.push(Cell::from(email.recipient.clone()).style(Theme::text_secondary()));
    }
    cells.push(
        Cell::from(truncate_string(display_subject(&email.subject), 60)).style(text_style),
    );
    cells.push(
        Cell::from(format_received_at(
            &email.email_received_at,
            &state.date_format,
        ))
        .style(Theme::text_muted()),
    );
    cells.push(
        Cell::from(if email.unread { "Unread" } else { "Read" }).style(if email.unread {
            Theme::header()
        } else {
            Theme::text_muted()
        }),
    );
    if wide {
        cells.push(Cell::from(email.labels.join(" ")).style(Theme::label_chip()));
    }

    Row::new(cells).style(base)
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    if !state.has_searched || state.emails.is_empty() {
        return;
    }
    let n = state.emails.len();
    let bounds = state.list.page_bounds(n);
    let text = format!(
        " Showing {}-{} of {} emails · page {}/{} · {} rows (z to change) ",
        bounds.start + 1,
        bounds.end,
        n,
        state.list.page + 1,
        state.list.page_count(n),
        state.list.page_size,
    );
    frame.render_widget(Paragraph::new(text).style(Theme::text_muted()), area);
}
