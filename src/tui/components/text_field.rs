//! # TextField Component
//!
//! One labelled, bordered input line with an optional error underneath.
//!
//! The value itself lives in the core form; this component only renders it.
//! Editing goes through `Action::Edit` so validation and submission stay in
//! the reducer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette;

/// Bordered line (3) plus the error row.
pub const FIELD_HEIGHT: u16 = 4;

const MASK: char = '•';

pub struct TextField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub masked: bool,
    pub focused: bool,
    pub error: Option<&'a str>,
    pub theme: &'a Theme,
}

impl<'a> TextField<'a> {
    pub fn new(label: &'a str, value: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            masked: false,
            focused: false,
            error: None,
            theme,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Text as it appears on screen (masked for passwords).
    pub fn display_value(&self) -> String {
        if self.masked {
            MASK.to_string().repeat(self.value.chars().count())
        } else {
            self.value.to_string()
        }
    }
}

impl Component for TextField<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let [input_area, error_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

        let border_style = if self.error.is_some() {
            palette::error(theme)
        } else if self.focused {
            palette::fg(theme.colors.highlight)
        } else {
            palette::secondary(theme)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", self.label), palette::subtitle(theme)))
            .style(
                palette::fg(theme.colors.text_primary)
                    .bg(palette::color(theme.colors.input_background)),
            );

        let display = self.display_value();
        let content = if display.is_empty() {
            Paragraph::new(Span::styled(self.placeholder, palette::fg(theme.colors.placeholder)))
        } else {
            Paragraph::new(display.clone())
        };
        frame.render_widget(content.block(block), input_area);

        if let Some(message) = self.error {
            frame.render_widget(
                Paragraph::new(Span::styled(format!(" {message}"), palette::error(theme))),
                error_area,
            );
        }

        if self.focused && input_area.width > 2 {
            let max_x = input_area.x + input_area.width - 2;
            let x = (input_area.x + 1).saturating_add(display.width() as u16).min(max_x);
            frame.set_cursor_position((x, input_area.y + 1));
        }
    }
}
