use serde::Deserialize;

/// Open-Meteo forecast response, limited to the blocks the dashboard uses.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current_weather: CurrentWeather,
    pub hourly: HourlyBlock,
    pub daily: DailyBlock,
    pub elevation: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: f64,
    pub weathercode: i32,
    pub time: String,
}

/// Hourly series, index-aligned with `time`.
#[derive(Debug, Clone, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub relative_humidity_2m: Vec<f64>,
    pub precipitation_probability: Vec<f64>,
    pub uv_index: Vec<f64>,
}

/// Daily extremes; only the first (today's) entry of each array is used.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyBlock {
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
    pub precipitation_probability_max: Vec<f64>,
}
