//! # Vehicle List Loader
//!
//! Lifecycle of the home screen's vehicle fetch, plus the rental click counter.
//!
//! ```text
//!            load()/refresh()
//!   Idle ──────────────────────► Loading ──ok──► Loaded(vehicles)
//!                                   ▲    └─err─► Failed(message)
//!                                   │                 │
//!                                   └──── refresh() ──┘ (from either terminal state)
//! ```
//!
//! Each `begin_load()` hands out a new generation number. A completion is only
//! applied if it carries the latest generation, so when two refreshes overlap
//! the response to the most recent request wins regardless of arrival order.
//! Generations come from one process-wide counter, so a result addressed to a
//! loader that was torn down never matches a later loader.
//!
//! The async `load()`/`refresh()` helpers run the whole cycle against a feed
//! in place. The TUI instead splits it: `begin_*` on the event thread, the
//! fetch on a tokio task, `complete()` when the result comes back.

use log::{debug, info, warn};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::vehicle::Vehicle;
use crate::feed::{FetchError, VehicleFeed};

/// Shown to the user whenever a load fails, whatever the cause.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load vehicles. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VehicleListState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Vehicle>),
    Failed(String),
}

impl VehicleListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, VehicleListState::Loading)
    }
}

// ============================================================================
// Click Counter
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterEvent {
    Increment,
    Reset,
}

/// Confirmed rentals since the last refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickCounter(u64);

impl ClickCounter {
    pub fn value(self) -> u64 {
        self.0
    }

    pub fn apply(&mut self, event: CounterEvent) {
        self.0 = match event {
            CounterEvent::Increment => self.0.saturating_add(1),
            CounterEvent::Reset => 0,
        };
    }
}

// ============================================================================
// Loader
// ============================================================================

/// Shared by every loader; 0 is never issued.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Default)]
pub struct VehicleListLoader {
    state: VehicleListState,
    clicks: ClickCounter,
    selected: Option<Vehicle>,
    /// Generation of the most recently issued request (0 = none yet).
    generation: u64,
}

impl VehicleListLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &VehicleListState {
        &self.state
    }

    /// Vehicles currently on display (empty unless Loaded).
    pub fn vehicles(&self) -> &[Vehicle] {
        match &self.state {
            VehicleListState::Loaded(vehicles) => vehicles,
            _ => &[],
        }
    }

    pub fn clicks(&self) -> u64 {
        self.clicks.value()
    }

    /// Vehicle awaiting rental confirmation, if any.
    pub fn selected(&self) -> Option<&Vehicle> {
        self.selected.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Moves to Loading and returns the generation the result must carry.
    pub fn begin_load(&mut self) -> u64 {
        self.generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        self.state = VehicleListState::Loading;
        debug!("Vehicle load started (generation {})", self.generation);
        self.generation
    }

    /// Resets the click counter, then starts a load.
    pub fn begin_refresh(&mut self) -> u64 {
        self.clicks.apply(CounterEvent::Reset);
        self.begin_load()
    }

    /// Applies a fetch result. Returns false if it belonged to a superseded request.
    pub fn complete(&mut self, generation: u64, result: Result<Vec<Vehicle>, FetchError>) -> bool {
        if self.generation == 0 || generation != self.generation {
            debug!(
                "Dropping stale vehicle result (generation {}, latest {})",
                generation, self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(vehicles) => {
                info!("Loaded {} vehicles", vehicles.len());
                VehicleListState::Loaded(vehicles)
            }
            Err(e) => {
                warn!("Vehicle load failed: {}", e);
                VehicleListState::Failed(LOAD_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    /// Full load cycle against `feed`.
    pub async fn load(&mut self, feed: &dyn VehicleFeed) -> &VehicleListState {
        let generation = self.begin_load();
        let result = feed.fetch_vehicles().await;
        self.complete(generation, result);
        &self.state
    }

    /// Counter reset followed by a full load cycle.
    pub async fn refresh(&mut self, feed: &dyn VehicleFeed) -> &VehicleListState {
        let generation = self.begin_refresh();
        let result = feed.fetch_vehicles().await;
        self.complete(generation, result);
        &self.state
    }

    /// Picks a vehicle from the current list for the rental dialog.
    pub fn select(&mut self, index: usize) -> Option<&Vehicle> {
        self.selected = self.vehicles().get(index).cloned();
        self.selected.as_ref()
    }

    pub fn cancel_rental(&mut self) {
        self.selected = None;
    }

    /// Counts a confirmed rental and closes the dialog.
    ///
    /// No network call, and `vehicle` need not be in the current list.
    pub fn confirm_rental(&mut self, vehicle: &Vehicle) {
        self.clicks.apply(CounterEvent::Increment);
        self.selected = None;
        info!(
            "Rental confirmed for '{}' (clicks: {})",
            vehicle.name,
            self.clicks.value()
        );
    }
}
