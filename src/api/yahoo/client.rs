use reqwest::header::USER_AGENT;
use reqwest::Client as HttpClient;

use super::models::ChartResponse;
use crate::utils::DashboardError;

/// Yahoo Finance quote client.
///
/// Uses the public v8 chart endpoint, which carries the regular market price
/// in its metadata and needs no API key.
pub struct YahooClient {
    http_client: HttpClient,
    base_url: String,
}

impl YahooClient {
    const DEFAULT_BASE_URL: &'static str = "https://query1.finance.yahoo.com/v8/finance/chart";
    // Yahoo rejects requests with a default library user agent.
    const AGENT: &'static str = "Mozilla/5.0 (X11; Linux x86_64) epaper-dashboard/1.0";

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

    /// GET /{symbol}
    ///
    /// Fetches the current regular market price for a ticker symbol.
    pub async fn quote_price(&self, symbol: &str) -> Result<f64, DashboardError> {
        let url = format!("{}/{}", self.base_url, symbol);

        let response = self
            .http_client
            .get(&url)
            .header(USER_AGENT, Self::AGENT)
            .query(&[("range", "1d"), ("interval", "1d")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DashboardError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        let body = response.json::<ChartResponse>().await?;

        if let Some(err) = body.chart.error {
            return Err(DashboardError::Malformed(format!(
                "quote error for {}: {}",
                symbol, err
            )));
        }

        body.chart
            .result
            .as_deref()
            .and_then(|results| results.first())
            .and_then(|r| r.meta.regular_market_price)
            .ok_or_else(|| {
                DashboardError::Malformed(format!("no market price in response for {}", symbol))
            })
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}
