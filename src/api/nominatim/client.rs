use std::time::Duration;

use reqwest::header::USER_AGENT;
use reqwest::Client as HttpClient;

use super::models::{Coordinates, SearchResult};
use crate::utils::DashboardError;

/// Nominatim (OpenStreetMap) geocoding client.
pub struct NominatimClient {
    http_client: HttpClient,
    base_url: String,
}

impl NominatimClient {
    const DEFAULT_BASE_URL: &'static str = "https://nominatim.openstreetmap.org";
    // Nominatim's usage policy rejects requests without an identifying agent.
    const AGENT: &'static str = "epaper-dashboard/1.0 (epaper-dashboard@example.com)";
    const TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client with a custom base URL (for testing).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    /// Look up coordinates for a free-text city name.
    ///
    /// Returns `Ok(None)` when the city is unknown to Nominatim; transport
    /// and decoding failures surface as errors. Callers must treat both as
    /// "skip this cycle" and never forward missing coordinates downstream.
    pub async fn geocode(&self, city_name: &str) -> Result<Option<Coordinates>, DashboardError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .header(USER_AGENT, Self::AGENT)
            .query(&[("q", city_name), ("format", "json"), ("limit", "1")])
            .timeout(Self::TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DashboardError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        let results = response.json::<Vec<SearchResult>>().await?;
        let Some(first) = results.first() else {
            return Ok(None);
        };

        let lat = first
            .lat
            .parse::<f64>()
            .map_err(|e| DashboardError::Malformed(format!("bad latitude '{}': {}", first.lat, e)))?;
        let lon = first
            .lon
            .parse::<f64>()
            .map_err(|e| DashboardError::Malformed(format!("bad longitude '{}': {}", first.lon, e)))?;

        Ok(Some(Coordinates { lat, lon }))
    }
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new()
    }
}
