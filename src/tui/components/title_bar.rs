//! # TitleBar Component
//!
//! Top status line: app name, current screen, status message and theme.
//!
//! Stateless. All three props come from different places (screen name and
//! status from `App`, theme from the active selection) and the bar simply
//! renders what it is given.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"RideX · login | Signed out   [light]"`
//! 2. **Default**: `"RideX · login   [light]"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette;

pub struct TitleBar<'a> {
    pub screen_name: &'a str,
    pub status_message: &'a str,
    pub theme: &'a Theme,
}

impl<'a> TitleBar<'a> {
    pub fn new(screen_name: &'a str, status_message: &'a str, theme: &'a Theme) -> Self {
        Self {
            screen_name,
            status_message,
            theme,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("RideX · {}", self.screen_name)
        } else {
            format!("RideX · {} | {}", self.screen_name, self.status_message)
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(self.text(), palette::title(self.theme)),
            Span::styled(format!("   [{}]", self.theme.kind), palette::secondary(self.theme)),
        ]);
        frame.render_widget(line.style(palette::surface(self.theme)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(mut bar: TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let text = render_text(TitleBar::new("home", "Signed out", Theme::light()));
        assert!(text.contains("RideX"));
        assert!(text.contains("home"));
        assert!(text.contains("| Signed out"));
        assert!(text.contains("[light]"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let text = render_text(TitleBar::new("welcome", "", Theme::dark()));
        assert!(text.contains("welcome"));
        assert!(!text.contains('|'));
        assert!(text.contains("[dark]"));
    }
}
