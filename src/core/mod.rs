//! # Core Application Logic
//!
//! This module contains RideX's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Validators           │
//!                    │  • Form controllers     │
//!                    │  • Vehicle list loader  │
//!                    │  • State + update()     │
//!                    │                         │
//!                    │  No UI. I/O only via    │
//!                    │  the VehicleFeed trait. │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Tests    │      │   Feed     │
//!     │  Adapter   │      │ (no UI at  │      │  (reqwest) │
//!     │ (ratatui)  │      │    all)    │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`validation`]: email and password validators, `ValidationResult`
//! - [`form`]: `LoginForm` / `SignupForm` controllers
//! - [`vehicle`]: the `Vehicle` record and lenient decoding
//! - [`loader`]: `VehicleListLoader` state machine and click counter
//! - [`theme`]: theme tables and the active-theme selection
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod form;
pub mod loader;
pub mod state;
pub mod theme;
pub mod validation;
pub mod vehicle;
