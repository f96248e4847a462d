//! # Actions
//!
//! Everything that can happen in RideX becomes an `Action`.
//! User presses Enter on the login form? That's `Action::SubmitLogin`.
//! The feed answers? That's `Action::VehiclesLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the adapter must
//! perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: `assert_eq!(update(&mut app, action), expected)`.
//! And debuggable: log every action, replay the exact session.

use log::{debug, info};

use crate::core::form::{Credentials, FieldEdit, LoginForm, SignupForm, SubmitOutcome};
use crate::core::loader::LOAD_FAILED_MESSAGE;
use crate::core::state::{App, HomeScreen, Notice, NoticeAction, Screen};
use crate::core::theme;
use crate::core::validation::FormField;
use crate::core::vehicle::Vehicle;
use crate::feed::FetchError;

pub const SIGNUP_INVALID_MESSAGE: &str = "Please fill in all the fields correctly.";
pub const SIGNUP_CREATED_MESSAGE: &str = "Your account has been created!";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    GetStarted,
    ShowLogin,
    ShowSignup,
    /// Step back one screen (login → welcome, signup → login).
    Back,
    Logout,

    // Forms
    Edit { field: FormField, edit: FieldEdit },
    SubmitLogin,
    SubmitSignup,
    DismissNotice,

    // Vehicles
    RefreshVehicles,
    VehiclesLoaded {
        generation: u64,
        result: Result<Vec<Vehicle>, FetchError>,
    },
    SelectVehicle(usize),
    ConfirmRental,
    CancelRental,

    ToggleTheme,
    Quit,
}

/// I/O the adapter must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Fetch the vehicle list and report back with this generation.
    FetchVehicles { generation: u64 },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} on {}", action, app.screen.name());

    match action {
        Action::Quit => Effect::Quit,

        Action::GetStarted | Action::ShowLogin => {
            app.screen = Screen::Login(LoginForm::new());
            Effect::None
        }

        Action::ShowSignup => {
            app.screen = Screen::Signup(SignupForm::new());
            Effect::None
        }

        Action::Back => {
            match app.screen {
                Screen::Login(_) => app.screen = Screen::Welcome,
                Screen::Signup(_) => app.screen = Screen::Login(LoginForm::new()),
                Screen::Welcome | Screen::Home(_) => {}
            }
            Effect::None
        }

        Action::Logout => {
            if matches!(app.screen, Screen::Home(_)) {
                info!("Logged out");
                app.status_message = "Signed out".to_string();
            }
            app.screen = Screen::Login(LoginForm::new());
            Effect::None
        }

        Action::Edit { field, edit } => {
            let buffer = match &mut app.screen {
                Screen::Login(form) => form.field_mut(field),
                Screen::Signup(form) => form.field_mut(field),
                _ => None,
            };
            if let Some(buffer) = buffer {
                edit.apply(buffer);
            }
            Effect::None
        }

        Action::SubmitLogin => {
            let Screen::Login(form) = &mut app.screen else {
                return Effect::None;
            };
            let mut accepted: Option<Credentials> = None;
            form.submit(|credentials| accepted = Some(credentials));

            match accepted {
                Some(credentials) => enter_home(app, credentials.email),
                None => Effect::None,
            }
        }

        Action::SubmitSignup => {
            let Screen::Signup(form) = &mut app.screen else {
                return Effect::None;
            };
            app.notice = Some(match form.submit() {
                SubmitOutcome::Accepted => {
                    info!("Sign up successful");
                    Notice {
                        title: "Success".to_string(),
                        body: SIGNUP_CREATED_MESSAGE.to_string(),
                        on_dismiss: NoticeAction::CompleteSignup,
                    }
                }
                SubmitOutcome::Rejected => Notice::error(SIGNUP_INVALID_MESSAGE),
            });
            Effect::None
        }

        Action::DismissNotice => {
            let Some(notice) = app.notice.take() else {
                return Effect::None;
            };
            if notice.on_dismiss == NoticeAction::CompleteSignup
                && let Screen::Signup(form) = &mut app.screen
            {
                let mut confirmed = false;
                form.acknowledge(|profile| {
                    info!("Account created for {}", profile.email);
                    confirmed = true;
                });
                if confirmed {
                    app.screen = Screen::Login(LoginForm::new());
                    app.status_message = "Account created, please sign in".to_string();
                }
            }
            Effect::None
        }

        Action::RefreshVehicles => match app.home_mut() {
            Some(home) => Effect::FetchVehicles {
                generation: home.loader.begin_refresh(),
            },
            None => Effect::None,
        },

        Action::VehiclesLoaded { generation, result } => {
            let Some(home) = app.home_mut() else {
                debug!(
                    "Discarding vehicle result (generation {}): home screen is gone",
                    generation
                );
                return Effect::None;
            };
            let failed = result.is_err();
            if home.loader.complete(generation, result) && failed {
                app.notice = Some(Notice::error(LOAD_FAILED_MESSAGE));
            }
            Effect::None
        }

        Action::SelectVehicle(index) => {
            if let Some(home) = app.home_mut() {
                home.loader.select(index);
            }
            Effect::None
        }

        Action::ConfirmRental => {
            if let Some(home) = app.home_mut()
                && let Some(vehicle) = home.loader.selected().cloned()
            {
                home.loader.confirm_rental(&vehicle);
            }
            Effect::None
        }

        Action::CancelRental => {
            if let Some(home) = app.home_mut() {
                home.loader.cancel_rental();
            }
            Effect::None
        }

        Action::ToggleTheme => {
            let kind = theme::toggle_theme();
            app.status_message = format!("Theme: {kind}");
            Effect::None
        }
    }
}

/// Switches to the home screen and kicks off the first load.
fn enter_home(app: &mut App, email: String) -> Effect {
    info!("Signed in as {}", email);
    let mut home = HomeScreen::new(Some(email));
    let generation = home.loader.begin_load();
    app.status_message = String::new();
    app.screen = Screen::Home(home);
    Effect::FetchVehicles { generation }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::VehicleListState;
    use crate::test_support::{sample_vehicles, test_app};

    fn type_into(app: &mut App, field: FormField, text: &str) {
        update(
            app,
            Action::Edit {
                field,
                edit: FieldEdit::Paste(text.to_string()),
            },
        );
    }

    fn logged_in_app() -> (App, u64) {
        let mut app = test_app();
        update(&mut app, Action::GetStarted);
        type_into(&mut app, FormField::Email, "rider@ridex.io");
        type_into(&mut app, FormField::Password, "abc123");
        match update(&mut app, Action::SubmitLogin) {
            Effect::FetchVehicles { generation } => (app, generation),
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_navigation_between_auth_screens() {
        let mut app = test_app();
        update(&mut app, Action::GetStarted);
        assert!(matches!(app.screen, Screen::Login(_)));

        update(&mut app, Action::ShowSignup);
        assert!(matches!(app.screen, Screen::Signup(_)));

        update(&mut app, Action::Back);
        assert!(matches!(app.screen, Screen::Login(_)));

        update(&mut app, Action::Back);
        assert!(matches!(app.screen, Screen::Welcome));
    }

    #[test]
    fn test_invalid_login_stays_put_with_inline_error() {
        let mut app = test_app();
        update(&mut app, Action::GetStarted);
        type_into(&mut app, FormField::Email, "not-an-email");
        type_into(&mut app, FormField::Password, "abc123");

        assert_eq!(update(&mut app, Action::SubmitLogin), Effect::None);

        let Screen::Login(form) = &app.screen else {
            panic!("still on login");
        };
        assert!(form.error(FormField::Email).is_some());
        assert!(form.error(FormField::Password).is_none());
        // Login failures are inline only
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_valid_login_enters_home_and_fetches() {
        let (app, generation) = logged_in_app();
        let home = app.home().expect("on home screen");
        assert_eq!(home.greeting(), "Welcome, rider@ridex.io");
        assert_eq!(home.loader.generation(), generation);
        assert!(app.is_loading());
    }

    #[test]
    fn test_vehicles_loaded_and_failed() {
        let (mut app, generation) = logged_in_app();
        update(
            &mut app,
            Action::VehiclesLoaded {
                generation,
                result: Ok(sample_vehicles()),
            },
        );
        assert_eq!(app.home().unwrap().loader.vehicles().len(), 3);
        assert!(app.notice.is_none());

        let Effect::FetchVehicles { generation } = update(&mut app, Action::RefreshVehicles) else {
            panic!("refresh should fetch");
        };
        update(
            &mut app,
            Action::VehiclesLoaded {
                generation,
                result: Err(FetchError::Status { status: 500 }),
            },
        );
        let home = app.home().unwrap();
        assert!(matches!(home.loader.state(), VehicleListState::Failed(_)));
        assert!(home.loader.vehicles().is_empty());
        assert_eq!(app.notice, Some(Notice::error(LOAD_FAILED_MESSAGE)));
    }

    #[test]
    fn test_stale_failure_does_not_raise_notice() {
        let (mut app, first) = logged_in_app();
        let Effect::FetchVehicles { generation: second } = update(&mut app, Action::RefreshVehicles)
        else {
            panic!("refresh should fetch");
        };
        update(
            &mut app,
            Action::VehiclesLoaded {
                generation: second,
                result: Ok(sample_vehicles()),
            },
        );
        update(
            &mut app,
            Action::VehiclesLoaded {
                generation: first,
                result: Err(FetchError::Network("late".into())),
            },
        );
        assert!(app.notice.is_none());
        assert_eq!(app.home().unwrap().loader.vehicles().len(), 3);
    }

    #[test]
    fn test_result_after_logout_is_discarded() {
        let (mut app, generation) = logged_in_app();
        update(&mut app, Action::Logout);
        let effect = update(
            &mut app,
            Action::VehiclesLoaded {
                generation,
                result: Err(FetchError::Network("late".into())),
            },
        );
        assert_eq!(effect, Effect::None);
        assert!(matches!(app.screen, Screen::Login(_)));
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_previous_session_result_ignored_after_relogin() {
        let (mut app, old_generation) = logged_in_app();
        update(&mut app, Action::Logout);
        type_into(&mut app, FormField::Email, "rider@ridex.io");
        type_into(&mut app, FormField::Password, "abc123");
        let Effect::FetchVehicles {
            generation: new_generation,
        } = update(&mut app, Action::SubmitLogin)
        else {
            panic!("expected a fetch on second login");
        };
        assert_ne!(old_generation, new_generation);

        update(
            &mut app,
            Action::VehiclesLoaded {
                generation: new_generation,
                result: Ok(sample_vehicles()),
            },
        );
        update(
            &mut app,
            Action::VehiclesLoaded {
                generation: old_generation,
                result: Err(FetchError::Network("late".into())),
            },
        );

        let home = app.home().unwrap();
        assert_eq!(home.loader.vehicles().len(), 3);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_rental_flow_counts_clicks_and_refresh_resets() {
        let (mut app, generation) = logged_in_app();
        update(
            &mut app,
            Action::VehiclesLoaded {
                generation,
                result: Ok(sample_vehicles()),
            },
        );

        update(&mut app, Action::SelectVehicle(0));
        assert!(app.home().unwrap().loader.selected().is_some());
        update(&mut app, Action::ConfirmRental);
        update(&mut app, Action::SelectVehicle(2));
        update(&mut app, Action::CancelRental);
        update(&mut app, Action::SelectVehicle(1));
        update(&mut app, Action::ConfirmRental);

        let home = app.home().unwrap();
        assert_eq!(home.loader.clicks(), 2);
        assert!(home.loader.selected().is_none());

        update(&mut app, Action::RefreshVehicles);
        assert_eq!(app.home().unwrap().loader.clicks(), 0);
    }

    #[test]
    fn test_confirm_without_selection_is_noop() {
        let (mut app, _) = logged_in_app();
        update(&mut app, Action::ConfirmRental);
        assert_eq!(app.home().unwrap().loader.clicks(), 0);
    }

    #[test]
    fn test_signup_errors_raise_notice() {
        let mut app = test_app();
        update(&mut app, Action::ShowSignup);
        update(&mut app, Action::SubmitSignup);

        assert_eq!(app.notice, Some(Notice::error(SIGNUP_INVALID_MESSAGE)));
        let Screen::Signup(form) = &app.screen else {
            panic!("still on signup");
        };
        assert_eq!(form.errors().len(), 3);

        update(&mut app, Action::DismissNotice);
        assert!(app.notice.is_none());
        assert!(matches!(app.screen, Screen::Signup(_)));
    }

    #[test]
    fn test_signup_success_waits_for_acknowledgment() {
        let mut app = test_app();
        update(&mut app, Action::ShowSignup);
        type_into(&mut app, FormField::Name, "Ada");
        type_into(&mut app, FormField::Email, "ada@example.com");
        type_into(&mut app, FormField::Password, "Abc123");

        update(&mut app, Action::SubmitSignup);
        let notice = app.notice.clone().expect("success notice");
        assert_eq!(notice.title, "Success");
        assert_eq!(notice.on_dismiss, NoticeAction::CompleteSignup);
        assert!(matches!(app.screen, Screen::Signup(_)));

        update(&mut app, Action::DismissNotice);
        assert!(matches!(app.screen, Screen::Login(_)));
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_edit_ignored_outside_forms() {
        let mut app = test_app();
        type_into(&mut app, FormField::Email, "ignored");
        assert!(matches!(app.screen, Screen::Welcome));
    }

    #[test]
    fn test_refresh_outside_home_does_nothing() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::RefreshVehicles), Effect::None);
    }
}
