//! HTTP implementation of the vehicle feed.
//!
//! One unauthenticated GET to a fixed URL: no headers, no query, no paging.
//! Any non-2xx status, transport fault or non-array body is a failure.

use async_trait::async_trait;
use log::{debug, info, warn};
use std::time::Duration;

use crate::core::vehicle::{Vehicle, vehicles_from_json};
use crate::feed::{FetchError, VehicleFeed};

pub const DEFAULT_FEED_URL: &str = "https://dummyjson.com/c/a9f2-93c8-400a-af3a";

pub struct HttpVehicleFeed {
    url: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl HttpVehicleFeed {
    /// `timeout: None` means the request may wait forever.
    pub fn new(url: String, timeout: Option<Duration>) -> Self {
        Self {
            url,
            timeout,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl VehicleFeed for HttpVehicleFeed {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, FetchError> {
        info!("Fetching vehicles from {}", self.url);

        let mut request = self.client.get(&self.url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Vehicle feed response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Vehicle feed error: HTTP {}", status);
            return Err(FetchError::Status { status });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let vehicles = vehicles_from_json(&body).map_err(|e| {
            warn!("Vehicle feed body is not a JSON array: {}", e);
            FetchError::Parse(e.to_string())
        })?;

        info!("Fetched {} vehicles", vehicles.len());
        Ok(vehicles)
    }
}
