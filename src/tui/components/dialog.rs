//! # Modal Dialogs
//!
//! Centered overlays drawn on top of the current screen:
//! - `RentalDialog`: rent / cancel for the selected vehicle
//! - `NoticeDialog`: a titled message with a single OK

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::core::state::Notice;
use crate::core::theme::Theme;
use crate::core::vehicle::Vehicle;
use crate::tui::component::Component;
use crate::tui::palette;

pub fn rental_prompt(vehicle: &Vehicle) -> String {
    format!("Do you want to rent {}?", vehicle.name)
}

fn render_modal(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    body: Line,
    help: &str,
    title_style: ratatui::style::Style,
) {
    let overlay = centered_rect(60, 30, area);
    frame.render_widget(Clear, overlay);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(title_style)
        .title(Span::styled(format!(" {title} "), title_style))
        .title_bottom(Line::from(help).centered())
        .padding(Padding::uniform(1))
        .style(palette::surface(theme));

    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        overlay,
    );
}

pub struct RentalDialog<'a> {
    pub vehicle: &'a Vehicle,
    pub theme: &'a Theme,
}

impl Component for RentalDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render_modal(
            frame,
            area,
            self.theme,
            "Rent Vehicle",
            Line::from(Span::styled(rental_prompt(self.vehicle), palette::body(self.theme))),
            " Enter Rent · Esc Cancel ",
            palette::fg(self.theme.colors.highlight),
        );
    }
}

pub struct NoticeDialog<'a> {
    pub notice: &'a Notice,
    pub theme: &'a Theme,
}

impl Component for NoticeDialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_style = if self.notice.title == "Error" {
            palette::error(self.theme)
        } else {
            palette::fg(self.theme.colors.highlight)
        };
        render_modal(
            frame,
            area,
            self.theme,
            &self.notice.title,
            Line::from(Span::styled(self.notice.body.as_str(), palette::body(self.theme))),
            " Enter OK ",
            title_style,
        );
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
