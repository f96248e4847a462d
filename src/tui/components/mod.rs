//! # TUI Components
//!
//! All widgets for the RideX terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Built each frame from borrowed core state:
//! - `TitleBar`: app name, screen, status message and theme
//! - `WelcomePage`: landing screen with the "Get Started" button
//! - `TextField`, `LoginView`, `SignupView`: the auth forms
//! - `RentalDialog`, `NoticeDialog`: centered modals
//! - `NavBar`, `ClickBadge`: bottom navigation and the click counter
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `CardListState` + `VehicleList`: scrollable vehicle cards. The state
//!   lives in `TuiState`; the list is a transient wrapper around it.
//!
//! Form values are not component state. They live in `core::form` and
//! change only through `Action::Edit`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs
//! ├── welcome.rs
//! ├── text_field.rs
//! ├── auth_form.rs     (login + signup views)
//! ├── vehicle_list.rs
//! ├── dialog.rs
//! └── nav_bar.rs
//! ```

mod auth_form;
mod dialog;
mod nav_bar;
mod text_field;
mod title_bar;
mod vehicle_list;
mod welcome;

pub use auth_form::{LoginView, SignupView};
pub use dialog::{NoticeDialog, RentalDialog};
pub use nav_bar::{ClickBadge, NavBar};
pub use title_bar::TitleBar;
pub use vehicle_list::{CardEvent, CardListState, VehicleList};
pub use welcome::WelcomePage;
