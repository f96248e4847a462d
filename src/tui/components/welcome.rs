//! # Welcome Page Component
//!
//! First screen: tagline, progress dots and the "Get Started" button.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette;

pub const WELCOME_TITLE: &str = "Welcome to RideX – Your Journey, Your Way!";
pub const WELCOME_SUBTITLE: &str =
    "Your Ultimate Vehicle Rental Solution! Explore, Rent, and Ride in Style Anytime, Anywhere!";

pub struct WelcomePage<'a> {
    pub theme: &'a Theme,
}

impl<'a> WelcomePage<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Component for WelcomePage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.theme;

        let text_lines = vec![
            Line::from(Span::styled(
                WELCOME_TITLE,
                palette::title(theme).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(WELCOME_SUBTITLE, palette::subtitle(theme))),
            Line::from(""),
            Line::from(vec![
                Span::styled("● ", palette::secondary(theme)),
                Span::styled("● ", palette::fg(theme.colors.highlight)),
                Span::styled("●", palette::secondary(theme)),
            ]),
        ];
        let text = Paragraph::new(text_lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        let width = area.width.min(70);
        let text_height = (text.line_count(width) as u16).max(5);

        let [body, _, button, _, hint] = Layout::vertical([
            Constraint::Length(text_height),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let [body] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(body);
        frame.render_widget(text, body);

        let [button] = Layout::horizontal([Constraint::Length(20)])
            .flex(Flex::Center)
            .areas(button);
        frame.render_widget(
            Paragraph::new("Get Started  >>")
                .alignment(Alignment::Center)
                .style(palette::button(theme)),
            button,
        );

        frame.render_widget(
            Paragraph::new("Enter continue · q quit · Ctrl+T theme")
                .alignment(Alignment::Center)
                .style(palette::secondary(theme)),
            hint,
        );
    }
}
