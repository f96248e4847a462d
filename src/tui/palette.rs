//! Converts core `Theme` colors (hex strings) into ratatui styles.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

use crate::core::theme::Theme;

/// Parses `#RRGGBB`; anything unparseable falls back to the terminal default.
pub fn color(hex: &str) -> Color {
    Color::from_str(hex).unwrap_or(Color::Reset)
}

pub fn fg(hex: &str) -> Style {
    Style::default().fg(color(hex))
}

pub fn title(theme: &Theme) -> Style {
    fg(theme.colors.title).add_modifier(Modifier::BOLD)
}

pub fn subtitle(theme: &Theme) -> Style {
    fg(theme.colors.subtitle)
}

pub fn body(theme: &Theme) -> Style {
    fg(theme.colors.body_text)
}

pub fn secondary(theme: &Theme) -> Style {
    fg(theme.colors.text_secondary)
}

pub fn error(theme: &Theme) -> Style {
    fg(theme.colors.error)
}

/// Call-to-action button: dark text on the highlight color.
pub fn button(theme: &Theme) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(color(theme.colors.highlight))
        .add_modifier(Modifier::BOLD)
}

/// Screen background.
pub fn screen(theme: &Theme) -> Style {
    Style::default()
        .bg(color(theme.colors.background))
        .fg(color(theme.colors.text_primary))
}

/// Card and bar surfaces.
pub fn surface(theme: &Theme) -> Style {
    Style::default()
        .bg(color(theme.colors.on_card))
        .fg(color(theme.colors.text_primary))
}
