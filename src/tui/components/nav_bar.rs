//! # Bottom Navigation
//!
//! `NavBar` shows the home/logout tabs and key hints. `ClickBadge` floats
//! above it in the bottom-right corner with the rental click count.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette;

pub struct NavBar<'a> {
    pub theme: &'a Theme,
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;
        let line = Line::from(vec![
            Span::styled(" ⌂ Home ", palette::button(theme)),
            Span::raw("  "),
            Span::styled("l", palette::fg(theme.colors.highlight)),
            Span::styled(" Logout   ", palette::secondary(theme)),
            Span::styled("r", palette::fg(theme.colors.highlight)),
            Span::styled(" Refresh   ", palette::secondary(theme)),
            Span::styled("t", palette::fg(theme.colors.highlight)),
            Span::styled(" Theme   ", palette::secondary(theme)),
            Span::styled("q", palette::fg(theme.colors.highlight)),
            Span::styled(" Quit", palette::secondary(theme)),
        ]);
        frame.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .style(palette::surface(theme)),
            area,
        );
    }
}

pub fn click_label(clicks: u64) -> String {
    format!("Clicks: {clicks}")
}

pub struct ClickBadge<'a> {
    pub clicks: u64,
    pub theme: &'a Theme,
}

impl ClickBadge<'_> {
    /// Bottom-right corner of `area`, sized to fit the label.
    pub fn area(&self, area: Rect) -> Rect {
        let width = (click_label(self.clicks).len() as u16 + 4).min(area.width);
        let height = 3.min(area.height);
        Rect::new(
            area.right().saturating_sub(width + 1),
            area.bottom().saturating_sub(height),
            width,
            height,
        )
    }
}

impl Component for ClickBadge<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let badge = self.area(area);
        frame.render_widget(Clear, badge);
        frame.render_widget(
            Paragraph::new(click_label(self.clicks))
                .alignment(Alignment::Center)
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(palette::fg(self.theme.colors.highlight)),
                )
                .style(palette::button(self.theme)),
            badge,
        );
    }
}
