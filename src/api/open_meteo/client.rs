use reqwest::Client as HttpClient;

use super::models::ForecastResponse;
use crate::utils::DashboardError;

/// Open-Meteo forecast client.
pub struct OpenMeteoClient {
    http_client: HttpClient,
    base_url: String,
}

impl OpenMeteoClient {
    const DEFAULT_BASE_URL: &'static str = "https://api.open-meteo.com/v1";

    const HOURLY_FIELDS: &'static str =
        "temperature_2m,relative_humidity_2m,precipitation_probability,uv_index";
    const DAILY_FIELDS: &'static str =
        "weather_code,temperature_2m_max,temperature_2m_min,sunrise,sunset,precipitation_probability_max";

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

    /// GET /forecast
    ///
    /// Fetches current conditions plus the hourly and daily blocks the
    /// dashboard renders, in fahrenheit/mph with the location's own timezone.
    pub async fn forecast(&self, lat: f64, lon: f64) -> Result<ForecastResponse, DashboardError> {
        let url = format!("{}/forecast", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("current_weather", "true".to_string()),
                ("hourly", Self::HOURLY_FIELDS.to_string()),
                ("daily", Self::DAILY_FIELDS.to_string()),
                ("temperature_unit", "fahrenheit".to_string()),
                ("windspeed_unit", "mph".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DashboardError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        Ok(response.json::<ForecastResponse>().await?)
    }
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new()
    }
}
