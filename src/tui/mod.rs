//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (vehicles loading): draws every ~80ms for the spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resize, or a
//!   background result arriving.
//!
//! ## Background Work
//!
//! `Effect::FetchVehicles` spawns a tokio task that calls the feed and sends
//! `Action::VehiclesLoaded` back over an mpsc channel. The loop drains that
//! channel between frames; stale generations are dropped by the reducer.

mod component;
mod components;
mod event;
mod palette;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::form::{FieldEdit, LoginForm, SignupForm};
use crate::core::state::{App, Screen};
use crate::core::theme;
use crate::core::validation::FormField;
use crate::feed::{HttpVehicleFeed, VehicleFeed};
use crate::tui::component::EventHandler;
use crate::tui::components::{CardEvent, CardListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Focused field index on the login/signup forms
    pub focus: usize,
    /// Screen seen at the last sync; a change resets focus and scroll
    screen_name: &'static str,
    pub cards: CardListState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: 0,
            screen_name: "welcome",
            cards: CardListState::new(),
        }
    }

    /// Resets per-screen presentation state after navigation.
    pub fn sync_screen(&mut self, app: &App) {
        let name = app.screen.name();
        if name != self.screen_name {
            debug!("Screen changed: {} -> {}", self.screen_name, name);
            self.screen_name = name;
            self.focus = 0;
            self.cards.reset();
        }
    }

    fn cycle_focus(&mut self, field_count: usize, forward: bool) {
        if field_count == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % field_count
        } else {
            (self.focus + field_count - 1) % field_count
        };
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Cursor marks the focused field
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

/// Build the vehicle feed from a resolved config.
pub fn build_feed(config: &ResolvedConfig) -> Arc<dyn VehicleFeed> {
    Arc::new(HttpVehicleFeed::new(
        config.feed_url.clone(),
        config.feed_timeout,
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    theme::set_active_theme(config.theme);
    let feed = build_feed(&config);
    info!("Using vehicle feed '{}' at {}", feed.name(), config.feed_url);

    let mut app = App::new(config.feed_url.clone());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        tui.sync_screen(&app);
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short timeout while the spinner runs, long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            if let Some(action) = route_event(&app, &mut tui, &event)
                && dispatch(&mut app, action, &feed, &tx) == Effect::Quit
            {
                break 'main;
            }
            tui.sync_screen(&app);
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if dispatch(&mut app, action, &feed, &tx) == Effect::Quit {
                break 'main;
            }
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Runs one action through the reducer and performs the resulting effect.
fn dispatch(
    app: &mut App,
    action: Action,
    feed: &Arc<dyn VehicleFeed>,
    tx: &mpsc::Sender<Action>,
) -> Effect {
    let effect = update(app, action);
    if let Effect::FetchVehicles { generation } = effect {
        spawn_fetch(feed.clone(), generation, tx.clone());
    }
    effect
}

fn spawn_fetch(feed: Arc<dyn VehicleFeed>, generation: u64, tx: mpsc::Sender<Action>) {
    info!("Spawning vehicle fetch (generation {})", generation);
    tokio::spawn(async move {
        let result = feed.fetch_vehicles().await;
        if tx
            .send(Action::VehiclesLoaded { generation, result })
            .is_err()
        {
            warn!(
                "Dropping vehicle result (generation {}): receiver dropped",
                generation
            );
        }
    });
}

/// Translates a terminal event into an action for the current screen.
///
/// Only touches `TuiState` (focus, card selection); all app state changes go
/// through the returned action.
pub fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }

    // A notice blocks everything else until dismissed
    if app.notice.is_some() {
        return match event {
            TuiEvent::Submit | TuiEvent::Escape => Some(Action::DismissNotice),
            _ => None,
        };
    }

    if matches!(event, TuiEvent::ToggleTheme) {
        return Some(Action::ToggleTheme);
    }

    match &app.screen {
        Screen::Welcome => match event {
            TuiEvent::Submit => Some(Action::GetStarted),
            TuiEvent::InputChar('t') => Some(Action::ToggleTheme),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => None,
        },
        Screen::Login(_) => route_form(
            tui,
            event,
            &LoginForm::FIELDS,
            Action::SubmitLogin,
            Action::ShowSignup,
        ),
        Screen::Signup(_) => route_form(
            tui,
            event,
            &SignupForm::FIELDS,
            Action::SubmitSignup,
            Action::ShowLogin,
        ),
        Screen::Home(home) => {
            if home.loader.selected().is_some() {
                return match event {
                    TuiEvent::Submit => Some(Action::ConfirmRental),
                    TuiEvent::Escape => Some(Action::CancelRental),
                    _ => None,
                };
            }
            match event {
                TuiEvent::Refresh | TuiEvent::InputChar('r') => Some(Action::RefreshVehicles),
                TuiEvent::InputChar('t') => Some(Action::ToggleTheme),
                TuiEvent::InputChar('l') => Some(Action::Logout),
                TuiEvent::InputChar('q') => Some(Action::Quit),
                TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Submit => {
                    match tui.cards.handle_event(event) {
                        Some(CardEvent::Open(index)) => Some(Action::SelectVehicle(index)),
                        None => None,
                    }
                }
                _ => None,
            }
        }
    }
}

fn route_form(
    tui: &mut TuiState,
    event: &TuiEvent,
    fields: &[FormField],
    submit: Action,
    switch: Action,
) -> Option<Action> {
    let focused = fields.get(tui.focus).copied()?;
    let edit = |edit| Some(Action::Edit { field: focused, edit });

    match event {
        TuiEvent::InputChar(c) => edit(FieldEdit::Insert(*c)),
        TuiEvent::Paste(text) => edit(FieldEdit::Paste(text.clone())),
        TuiEvent::Backspace => edit(FieldEdit::Backspace),
        TuiEvent::NextField | TuiEvent::CursorDown => {
            tui.cycle_focus(fields.len(), true);
            None
        }
        TuiEvent::PrevField | TuiEvent::CursorUp => {
            tui.cycle_focus(fields.len(), false);
            None
        }
        TuiEvent::Submit => Some(submit),
        TuiEvent::SwitchForm => Some(switch),
        TuiEvent::Escape => Some(Action::Back),
        _ => None,
    }
}
