use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::loader::VehicleListState;
use crate::core::state::{App, HomeScreen, Screen};
use crate::core::theme::{self, Theme};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ClickBadge, LoginView, NavBar, NoticeDialog, RentalDialog, SignupView, TitleBar, VehicleList,
    WelcomePage,
};
use crate::tui::palette;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const HOME_TAGLINE: &str = "Rent your dream vehicles with RideX!";
pub const EMPTY_LIST_MESSAGE: &str = "No vehicles available.";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let theme = theme::active_theme();
    frame.render_widget(Block::new().style(palette::screen(theme)), frame.area());

    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    TitleBar::new(app.screen.name(), &app.status_message, theme).render(frame, title_area);

    match &app.screen {
        Screen::Welcome => WelcomePage::new(theme).render(frame, main_area),
        Screen::Login(form) => LoginView {
            form,
            focus: tui.focus,
            theme,
        }
        .render(frame, main_area),
        Screen::Signup(form) => SignupView {
            form,
            focus: tui.focus,
            theme,
        }
        .render(frame, main_area),
        Screen::Home(home) => draw_home(frame, main_area, home, tui, theme, spinner_frame),
    }

    if let Some(notice) = &app.notice {
        NoticeDialog { notice, theme }.render(frame, frame.area());
    }
}

fn draw_home(
    frame: &mut Frame,
    area: Rect,
    home: &HomeScreen,
    tui: &mut TuiState,
    theme: &Theme,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min};
    let [header_area, body_area, nav_area] =
        Layout::vertical([Length(3), Min(0), Length(1)]).areas(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(home.greeting(), palette::title(theme))),
        Line::from(Span::styled(HOME_TAGLINE, palette::subtitle(theme))),
    ])
    .block(Block::new().padding(Padding::horizontal(1)));
    frame.render_widget(header, header_area);

    match home.loader.state() {
        VehicleListState::Idle | VehicleListState::Loading => {
            let spinner = SPINNER[spinner_frame % SPINNER.len()];
            frame.render_widget(
                centered_message(format!("{spinner} Loading vehicles..."), palette::body(theme)),
                vertical_center(body_area),
            );
        }
        VehicleListState::Failed(message) => {
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled(message.as_str(), palette::error(theme))),
                    Line::from(Span::styled("Press r to try again", palette::secondary(theme))),
                ])
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
                vertical_center(body_area),
            );
        }
        VehicleListState::Loaded(vehicles) if vehicles.is_empty() => {
            frame.render_widget(
                centered_message(EMPTY_LIST_MESSAGE.to_string(), palette::secondary(theme)),
                vertical_center(body_area),
            );
        }
        VehicleListState::Loaded(vehicles) => {
            let list_area = Rect {
                x: body_area.x + 1,
                width: body_area.width.saturating_sub(2),
                ..body_area
            };
            VehicleList::new(vehicles, &mut tui.cards, theme).render(frame, list_area);
        }
    }

    ClickBadge {
        clicks: home.loader.clicks(),
        theme,
    }
    .render(frame, body_area);

    NavBar { theme }.render(frame, nav_area);

    if let Some(vehicle) = home.loader.selected() {
        RentalDialog { vehicle, theme }.render(frame, area);
    }
}

fn centered_message(text: String, style: ratatui::style::Style) -> Paragraph<'static> {
    Paragraph::new(Span::styled(text, style))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

/// Two-row band in the middle of `area`.
fn vertical_center(area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(area);
    middle
}
