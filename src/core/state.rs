//! # Application State
//!
//! Core business state for RideX. No TUI-specific types live here;
//! presentation state (focus, scroll) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen               // exactly one screen is active
//! │   ├── Welcome
//! │   ├── Login(LoginForm)
//! │   ├── Signup(SignupForm)
//! │   └── Home(HomeScreen)         // greeting + VehicleListLoader
//! ├── notice: Option<Notice>       // modal alert, blocks other input
//! ├── status_message: String       // status line text
//! └── feed_url: String             // where vehicles come from
//! ```
//!
//! Each screen owns its controller. Leaving a screen drops it, so a load that
//! finishes after the user logged out has nothing to land on and is discarded.
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::form::{LoginForm, SignupForm};
use crate::core::loader::VehicleListLoader;

/// Greeting fallback when no email was carried to the home screen.
pub const GUEST_NAME: &str = "Guest";

#[derive(Debug)]
pub struct HomeScreen {
    /// Email carried over from a successful login.
    pub email: Option<String>,
    pub loader: VehicleListLoader,
}

impl HomeScreen {
    pub fn new(email: Option<String>) -> Self {
        Self {
            email,
            loader: VehicleListLoader::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        match self.email.as_deref() {
            Some(email) if !email.is_empty() => email,
            _ => GUEST_NAME,
        }
    }

    pub fn greeting(&self) -> String {
        format!("Welcome, {}", self.display_name())
    }
}

#[derive(Debug)]
pub enum Screen {
    Welcome,
    Login(LoginForm),
    Signup(SignupForm),
    Home(HomeScreen),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Login(_) => "login",
            Screen::Signup(_) => "signup",
            Screen::Home(_) => "home",
        }
    }
}

/// What dismissing a notice should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeAction {
    Nothing,
    /// Acknowledge the pending signup and continue to login.
    CompleteSignup,
}

/// A modal alert with a fixed title and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub on_dismiss: NoticeAction,
}

impl Notice {
    pub fn error(body: &str) -> Self {
        Self {
            title: "Error".to_string(),
            body: body.to_string(),
            on_dismiss: NoticeAction::Nothing,
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub notice: Option<Notice>,
    pub status_message: String,
    pub feed_url: String,
}

impl App {
    pub fn new(feed_url: String) -> Self {
        Self {
            screen: Screen::Welcome,
            notice: None,
            status_message: String::from("Welcome to RideX!"),
            feed_url,
        }
    }

    pub fn home(&self) -> Option<&HomeScreen> {
        match &self.screen {
            Screen::Home(home) => Some(home),
            _ => None,
        }
    }

    pub fn home_mut(&mut self) -> Option<&mut HomeScreen> {
        match &mut self.screen {
            Screen::Home(home) => Some(home),
            _ => None,
        }
    }

    /// True when the UI should animate (spinner on the home screen).
    pub fn is_loading(&self) -> bool {
        self.home()
            .is_some_and(|home| home.loader.state().is_loading())
    }
}
