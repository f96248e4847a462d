//! # Vehicle Card List
//!
//! Scrollable column of vehicle cards. Each card shows the name as its
//! title, then the vehicle number, description and image URL.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CardListState` lives in `TuiState` (selection, scroll offset, heights)
//! - `VehicleList` is built each frame with the current vehicles

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect, Size};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::theme::Theme;
use crate::core::vehicle::Vehicle;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette;

/// Borders plus the number and image rows.
const CARD_CHROME: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    /// Enter on the selected card: open the rental dialog.
    Open(usize),
}

/// Selection and scroll position; persisted across frames.
#[derive(Default)]
pub struct CardListState {
    pub selected: usize,
    pub scroll_state: ScrollViewState,
    /// Card count seen at the last render
    len: usize,
    /// Per-card heights from the last render
    heights: Vec<u16>,
    viewport_height: u16,
}

impl CardListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top, e.g. after a refresh or when leaving home.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Keep the selected card fully in view.
    fn scroll_to_selected(&mut self) {
        let current = self.scroll_state.offset().y;
        let y = scroll_offset_for(&self.heights, self.selected, current, self.viewport_height);
        if y != current {
            self.scroll_state.set_offset(Position { x: 0, y });
        }
    }
}

impl EventHandler for CardListState {
    type Event = CardEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.scroll_to_selected();
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(self.len - 1);
                self.scroll_to_selected();
                None
            }
            TuiEvent::Submit => Some(CardEvent::Open(self.selected)),
            _ => None,
        }
    }
}

/// Vertical offset that shows card `index` given the current offset.
///
/// Cards taller than the viewport are aligned to their top edge.
pub fn scroll_offset_for(heights: &[u16], index: usize, current: u16, viewport: u16) -> u16 {
    if index >= heights.len() {
        return current;
    }
    let top = total_height(&heights[..index]);
    let bottom = top.saturating_add(heights[index]);

    if top < current || heights[index] > viewport {
        top
    } else if bottom > current.saturating_add(viewport) {
        bottom - viewport
    } else {
        current
    }
}

/// Sum of card heights, saturating at the largest canvas a `ScrollView` can hold.
fn total_height(heights: &[u16]) -> u16 {
    heights.iter().fold(0u16, |acc, &h| acc.saturating_add(h))
}

fn card_height(vehicle: &Vehicle, width: u16) -> u16 {
    let inner = width.saturating_sub(2).max(1);
    let description = Paragraph::new(vehicle.description.as_str()).wrap(Wrap { trim: true });
    let lines = u16::try_from(description.line_count(inner)).unwrap_or(u16::MAX);
    CARD_CHROME.saturating_add(lines.max(1))
}

struct Card<'a> {
    vehicle: &'a Vehicle,
    selected: bool,
    theme: &'a Theme,
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let border = if self.selected {
            palette::fg(theme.colors.highlight)
        } else {
            palette::secondary(theme)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Span::styled(format!(" {} ", self.vehicle.name), palette::title(theme)))
            .style(palette::surface(theme));

        let lines = vec![
            Line::from(vec![
                Span::styled("No. ", palette::secondary(theme)),
                Span::styled(
                    self.vehicle.vehicle_number.as_str(),
                    palette::fg(theme.colors.accent),
                ),
            ]),
            Line::from(Span::styled(self.vehicle.description.as_str(), palette::body(theme))),
            Line::from(Span::styled(self.vehicle.image.as_str(), palette::secondary(theme))),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

pub struct VehicleList<'a> {
    pub vehicles: &'a [Vehicle],
    pub state: &'a mut CardListState,
    pub theme: &'a Theme,
}

impl<'a> VehicleList<'a> {
    pub fn new(vehicles: &'a [Vehicle], state: &'a mut CardListState, theme: &'a Theme) -> Self {
        Self {
            vehicles,
            state,
            theme,
        }
    }
}

impl Component for VehicleList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Leave a column for the scrollbar
        let content_width = area.width.saturating_sub(1);

        self.state.len = self.vehicles.len();
        self.state.viewport_height = area.height;
        if self.state.selected >= self.state.len {
            self.state.selected = self.state.len.saturating_sub(1);
        }
        self.state.heights = self
            .vehicles
            .iter()
            .map(|v| card_height(v, content_width))
            .collect();

        let total = total_height(&self.state.heights);
        let max_y = total.saturating_sub(area.height);
        if self.state.scroll_state.offset().y > max_y {
            self.state.scroll_state.set_offset(Position { x: 0, y: max_y });
        }

        let canvas_height = total.max(area.height);
        let mut scroll_view = ScrollView::new(Size::new(content_width, canvas_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        // Only cards intersecting the viewport are drawn
        let view_top = self.state.scroll_state.offset().y;
        let view_bottom = view_top.saturating_add(area.height);
        let mut y: u16 = 0;
        for (i, (vehicle, &height)) in self.vehicles.iter().zip(&self.state.heights).enumerate() {
            if y >= canvas_height || y >= view_bottom {
                break;
            }
            let bottom = y.saturating_add(height);
            if bottom > view_top {
                let card = Card {
                    vehicle,
                    selected: i == self.state.selected,
                    theme: self.theme,
                };
                scroll_view.render_widget(card, Rect::new(0, y, content_width, bottom - y));
            }
            y = bottom;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_vehicles;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_scroll_offset_for() {
        let heights = [5, 5, 5, 5];
        // Already visible
        assert_eq!(scroll_offset_for(&heights, 1, 0, 12), 0);
        // Below the viewport: bottom edge aligns
        assert_eq!(scroll_offset_for(&heights, 3, 0, 12), 8);
        // Above the viewport: top edge aligns
        assert_eq!(scroll_offset_for(&heights, 0, 8, 12), 0);
        // Taller than the viewport
        assert_eq!(scroll_offset_for(&[20], 0, 3, 12), 0);
        // Out of range keeps the current offset
        assert_eq!(scroll_offset_for(&heights, 9, 4, 12), 4);
    }

    #[test]
    fn test_navigation_clamps_and_opens() {
        let mut state = CardListState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);

        state.len = 3;
        state.heights = vec![5, 5, 5];
        state.viewport_height = 20;

        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);

        for _ in 0..5 {
            state.handle_event(&TuiEvent::CursorDown);
        }
        assert_eq!(state.selected, 2);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(CardEvent::Open(2)));
    }

    #[test]
    fn test_render_cards() {
        let vehicles = sample_vehicles();
        let mut state = CardListState::new();
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal
            .draw(|f| VehicleList::new(&vehicles, &mut state, Theme::light()).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Tesla Model 3"));
        assert!(text.contains("Toyota Supra"));
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_large_feed_saturates_canvas() {
        let vehicles: Vec<Vehicle> = (0..14_000)
            .map(|i| Vehicle {
                name: format!("Car {i}"),
                description: "Compact".to_string(),
                ..Default::default()
            })
            .collect();
        let mut state = CardListState::new();
        let mut terminal = Terminal::new(TestBackend::new(16, 10)).unwrap();
        terminal
            .draw(|f| VehicleList::new(&vehicles, &mut state, Theme::light()).render(f, f.area()))
            .unwrap();

        assert_eq!(state.len(), 14_000);
        assert_eq!(total_height(&state.heights), u16::MAX);

        // Selecting the last card scrolls to the end of the canvas without overflow
        state.selected = state.len() - 2;
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 13_999);
        terminal
            .draw(|f| VehicleList::new(&vehicles, &mut state, Theme::light()).render(f, f.area()))
            .unwrap();
    }

    #[test]
    fn test_scroll_offset_saturates() {
        let heights = [u16::MAX - 5, 8];
        assert_eq!(scroll_offset_for(&heights, 1, 0, 10), u16::MAX - 10);
        assert_eq!(scroll_offset_for(&[u16::MAX; 3], 2, 0, 10), u16::MAX);
    }
}
