//! Weather fetch-and-persist cycle
//!
//! Each cycle geocodes the city under the rotation cursor, fetches its
//! forecast, replaces `weather-data.json` and re-renders the graph. The
//! cursor only advances after a fully successful cycle, so a flaky city is
//! retried on the next tick instead of being skipped.

use std::path::PathBuf;

use chrono::Local;
use tracing::{info, warn};

use crate::api::{NominatimClient, OpenMeteoClient};
use crate::config::Config;
use crate::models::{CurrentConditions, IconKind, WeatherSnapshot};
use crate::services::chart;
use crate::utils::{write_atomic, DashboardError};

use crate::api::open_meteo::ForecastResponse;

/// Rotation position in the configured city list.
///
/// Starts at zero; `advance` wraps at the end of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityCursor {
    index: usize,
}

impl CityCursor {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current<'a>(&self, cities: &'a [String]) -> Option<&'a str> {
        cities.get(self.index).map(String::as_str)
    }

    pub fn advance(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        self.index = (self.index + 1) % len;
    }
}

impl Default for CityCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Periodic producer of `weather-data.json` and `weather-graph.png`.
pub struct WeatherService {
    geocoder: NominatimClient,
    forecast_client: OpenMeteoClient,
    cities: Vec<String>,
    snapshot_path: PathBuf,
    graph_path: PathBuf,
}

impl WeatherService {
    pub fn new(config: &Config) -> Self {
        Self {
            geocoder: NominatimClient::new(),
            forecast_client: OpenMeteoClient::new(),
            cities: config.cities.clone(),
            snapshot_path: config.weather_output_path(),
            graph_path: config.graph_output_path(),
        }
    }

    /// For testing against stub upstreams.
    pub fn with_clients(
        geocoder: NominatimClient,
        forecast_client: OpenMeteoClient,
        cities: Vec<String>,
        snapshot_path: PathBuf,
        graph_path: PathBuf,
    ) -> Self {
        Self {
            geocoder,
            forecast_client,
            cities,
            snapshot_path,
            graph_path,
        }
    }

    /// Run one weather cycle for the city under the cursor.
    ///
    /// A geocoding miss ends the cycle without touching the previous
    /// snapshot or graph and without advancing the cursor; coordinates are
    /// never forwarded when the lookup came back empty.
    pub async fn run_cycle(&self, cursor: &mut CityCursor) -> Result<(), DashboardError> {
        let Some(city) = cursor.current(&self.cities) else {
            warn!("no cities configured, skipping weather cycle");
            return Ok(());
        };
        let city = city.to_string();
        info!("fetch weather for {}", city);

        let coords = match self.geocoder.geocode(&city).await? {
            Some(coords) => coords,
            None => {
                warn!("geocoding found nothing for '{}', keeping stale snapshot", city);
                return Ok(());
            }
        };

        let forecast = self.forecast_client.forecast(coords.lat, coords.lon).await?;
        let snapshot = build_snapshot(&city, forecast);

        let json = serde_json::to_vec_pretty(&snapshot)?;
        write_atomic(&self.snapshot_path, &json)?;
        info!("weather data saved to {}", self.snapshot_path.display());

        chart::render(&self.graph_path, &snapshot, Local::now().naive_local())?;
        info!("graph saved to {}", self.graph_path.display());

        cursor.advance(self.cities.len());
        Ok(())
    }
}

/// Assemble the output snapshot from a forecast response.
///
/// Hourly arrays are truncated to 24 entries; the icon file name is derived
/// from the current weather code so the front end can use it directly.
fn build_snapshot(city_name: &str, forecast: ForecastResponse) -> WeatherSnapshot {
    let icon = IconKind::from_code(forecast.current_weather.weathercode)
        .file_name()
        .to_string();
    let daily = forecast.daily;
    let hourly = forecast.hourly;

    WeatherSnapshot {
        city_name: city_name.to_string(),
        current: CurrentConditions {
            temperature: forecast.current_weather.temperature,
            windspeed: forecast.current_weather.windspeed,
            winddirection: forecast.current_weather.winddirection,
            weathercode: forecast.current_weather.weathercode,
            time: forecast.current_weather.time,
        },
        temps: head24(hourly.temperature_2m),
        times: head24(hourly.time),
        precipitation: head24(hourly.precipitation_probability),
        humidity: head24(hourly.relative_humidity_2m),
        uv_index: head24(hourly.uv_index),
        min: daily.temperature_2m_min.first().copied().unwrap_or_default(),
        max: daily.temperature_2m_max.first().copied().unwrap_or_default(),
        sunrise: daily.sunrise.first().cloned().unwrap_or_default(),
        sunset: daily.sunset.first().cloned().unwrap_or_default(),
        precip_prob: daily
            .precipitation_probability_max
            .first()
            .copied()
            .unwrap_or_default(),
        elevation: forecast.elevation,
        icon,
    }
}

fn head24<T>(values: Vec<T>) -> Vec<T> {
    values.into_iter().take(24).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use axum::Router;

    fn cities() -> Vec<String> {
        vec!["Nowhere, Xx".to_string(), "Elsewhere, Yy".to_string()]
    }

    /// Stub Nominatim that knows no cities.
    async fn spawn_empty_geocoder() -> String {
        let app = Router::new().route("/search", get(|| async { axum::Json(serde_json::json!([])) }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_cursor_starts_at_zero_advances_and_wraps() {
        let cities = cities();
        let mut cursor = CityCursor::new();
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.current(&cities), Some("Nowhere, Xx"));

        cursor.advance(cities.len());
        assert_eq!(cursor.current(&cities), Some("Elsewhere, Yy"));

        cursor.advance(cities.len());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_build_snapshot_truncates_and_classifies() {
        let forecast: ForecastResponse = serde_json::from_value(serde_json::json!({
            "elevation": 1619.0,
            "current_weather": {
                "temperature": 87.3,
                "windspeed": 9.8,
                "winddirection": 215.0,
                "weathercode": 95,
                "time": "2026-08-23T14:00"
            },
            "hourly": {
                "time": (0..48).map(|h| format!("2026-08-23T{:02}:00", h % 24)).collect::<Vec<_>>(),
                "temperature_2m": vec![70.0; 48],
                "relative_humidity_2m": vec![40.0; 48],
                "precipitation_probability": vec![5.0; 48],
                "uv_index": vec![1.0; 48]
            },
            "daily": {
                "temperature_2m_max": [93.0],
                "temperature_2m_min": [68.4],
                "sunrise": ["2026-08-23T06:25"],
                "sunset": ["2026-08-23T19:42"],
                "precipitation_probability_max": [20.0]
            }
        }))
        .unwrap();

        let snapshot = build_snapshot("Albuquerque, Nm", forecast);
        assert_eq!(snapshot.temps.len(), 24);
        assert_eq!(snapshot.times.len(), 24);
        assert_eq!(snapshot.humidity.len(), 24);
        assert_eq!(snapshot.icon, "storm.png");
        assert_eq!(snapshot.min, 68.4);
        assert_eq!(snapshot.max, 93.0);
        assert_eq!(snapshot.elevation, 1619.0);
    }

    #[tokio::test]
    async fn test_geocode_miss_keeps_snapshot_stale_and_cursor_unmoved() {
        let dir = std::env::temp_dir().join("dashboard-weather-tests-miss");
        std::fs::create_dir_all(&dir).unwrap();
        let snapshot_path = dir.join("weather-data.json");
        let graph_path = dir.join("weather-graph.png");

        let geocoder = NominatimClient::with_base_url(spawn_empty_geocoder().await);
        // Forecast client must never be reached; a closed port proves it.
        let forecast_client = OpenMeteoClient::with_base_url("http://127.0.0.1:1".to_string());
        let service = WeatherService::with_clients(
            geocoder,
            forecast_client,
            cities(),
            snapshot_path.clone(),
            graph_path.clone(),
        );

        let mut cursor = CityCursor::new();
        service.run_cycle(&mut cursor).await.unwrap();

        assert!(!snapshot_path.exists());
        assert!(!graph_path.exists());
        assert_eq!(cursor.index(), 0);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_geocoder_outage_surfaces_error_without_write() {
        let dir = std::env::temp_dir().join("dashboard-weather-tests-outage");
        std::fs::create_dir_all(&dir).unwrap();
        let snapshot_path = dir.join("weather-data.json");
        let graph_path = dir.join("weather-graph.png");

        let geocoder = NominatimClient::with_base_url("http://127.0.0.1:1".to_string());
        let forecast_client = OpenMeteoClient::with_base_url("http://127.0.0.1:1".to_string());
        let service = WeatherService::with_clients(
            geocoder,
            forecast_client,
            cities(),
            snapshot_path.clone(),
            graph_path.clone(),
        );

        let mut cursor = CityCursor::new();
        let result = service.run_cycle(&mut cursor).await;

        assert!(result.is_err());
        assert!(!snapshot_path.exists());
        assert_eq!(cursor.index(), 0);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
