//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::state::App;
use crate::core::vehicle::{Vehicle, VehicleId};
use crate::feed::{FetchError, VehicleFeed};

/// A feed that answers every request with the same canned result.
pub struct StaticFeed {
    result: Result<Vec<Vehicle>, FetchError>,
}

impl StaticFeed {
    pub fn ok(vehicles: Vec<Vehicle>) -> Self {
        Self { result: Ok(vehicles) }
    }

    pub fn err(error: FetchError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl VehicleFeed for StaticFeed {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, FetchError> {
        self.result.clone()
    }
}

/// Three vehicles; the last one has no id.
pub fn sample_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: Some(VehicleId::Number(1)),
            name: "Tesla Model 3".to_string(),
            vehicle_number: "KA-01-EV-0001".to_string(),
            description: "Electric sedan with autopilot".to_string(),
            image: "https://img.example/tesla.jpg".to_string(),
        },
        Vehicle {
            id: Some(VehicleId::Number(2)),
            name: "Toyota Supra".to_string(),
            vehicle_number: "MH-12-AB-2002".to_string(),
            description: "Two-door sports coupe".to_string(),
            image: "https://img.example/toyota.jpg".to_string(),
        },
        Vehicle {
            id: None,
            name: "Hummer EV".to_string(),
            vehicle_number: "DL-03-XY-3003".to_string(),
            description: "Electric off-road truck".to_string(),
            image: "https://img.example/hummer.jpg".to_string(),
        },
    ]
}

/// Creates a test App pointed at an unroutable feed URL.
pub fn test_app() -> App {
    App::new("http://127.0.0.1:9/vehicles".to_string())
}
