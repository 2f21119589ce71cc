//! Centralized theming for the ragdash TUI
//!
//! Single source of truth for all colors and styles used throughout
//! the application.

use ratatui::style::{Color, Modifier, Style};

use crate::constants::AVATAR_PALETTE_SIZE;

/// Fixed palette for sender avatars. Index is the sender's first char
/// code modulo the palette size, so a given address always renders the
/// same color.
pub const AVATAR_PALETTE: [Color; AVATAR_PALETTE_SIZE] = [
    Color::Rgb(25, 118, 210),  // blue
    Color::Rgb(56, 142, 60),   // green
    Color::Rgb(245, 124, 0),   // orange
    Color::Rgb(211, 47, 47),   // red
    Color::Rgb(123, 31, 162),  // purple
    Color::Rgb(2, 136, 209),   // light blue
    Color::Rgb(104, 159, 56),  // light green
    Color::Rgb(255, 160, 0),   // amber
];

pub struct Theme;

impl Theme {
    pub fn text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn text_unread() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default().bg(Color::Rgb(69, 71, 90)).fg(Color::White)
    }

    pub fn selected_bold() -> Style {
        Self::selected().add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().bg(Color::Rgb(24, 24, 37)).fg(Color::Cyan)
    }

    pub fn error_bar() -> Style {
        Style::default().bg(Color::Red).fg(Color::White)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::Rgb(88, 91, 112))
    }

    pub fn header() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn header_active() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn help_key() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn help_desc() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn label_chip() -> Style {
        Style::default().fg(Color::Magenta)
    }

    pub fn input_active() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn avatar(index: usize) -> Style {
        Style::default()
            .fg(AVATAR_PALETTE[index % AVATAR_PALETTE.len()])
            .add_modifier(Modifier::BOLD)
    }
}
