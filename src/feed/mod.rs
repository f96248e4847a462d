//! # Vehicle Feed
//!
//! Where the vehicle list comes from. `VehicleFeed` is the seam; the loader
//! only ever talks to the trait, so tests swap in an in-memory feed and the
//! binary uses `HttpVehicleFeed`.

pub mod error;
pub mod http;

pub use error::FetchError;
pub use http::{DEFAULT_FEED_URL, HttpVehicleFeed};

use async_trait::async_trait;

use crate::core::vehicle::Vehicle;

#[async_trait]
pub trait VehicleFeed: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Fetches the full vehicle list in one request.
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, FetchError>;
}
