use thiserror::Error;

/// Crate-wide error type.
///
/// No variant is fatal to the process: fetch cycles catch these at the
/// scheduler boundary, log them, and wait for the next tick.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed upstream response: {0}")]
    Malformed(String),

    #[error("geocoding returned no result for '{0}'")]
    CityNotFound(String),

    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
