//! Weather snapshot written to `weather-data.json`

use serde::{Deserialize, Serialize};

/// Current conditions block, mirroring Open-Meteo's `current_weather`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: f64,
    pub weathercode: i32,
    pub time: String,
}

/// The full weather document, replaced wholesale on every refresh.
///
/// Hourly arrays are truncated to 24 entries and aligned by index with
/// `times`. `icon` is the classifier output for the current weather code,
/// pre-computed so the front end only has to build an image path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub city_name: String,
    pub current: CurrentConditions,
    pub temps: Vec<f64>,
    pub times: Vec<String>,
    pub precipitation: Vec<f64>,
    pub humidity: Vec<f64>,
    pub uv_index: Vec<f64>,
    pub min: f64,
    pub max: f64,
    pub sunrise: String,
    pub sunset: String,
    pub precip_prob: f64,
    pub elevation: f64,
    pub icon: String,
}
