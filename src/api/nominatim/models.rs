use serde::{Deserialize, Serialize};

/// A single entry from the Nominatim search response.
/// Nominatim returns coordinates as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub lat: String,
    pub lon: String,
}

/// Parsed geographic coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}
