//! Stock quote fetch-and-persist cycle

use std::path::PathBuf;

use tracing::{info, warn};

use crate::api::YahooClient;
use crate::config::{Config, Holding};
use crate::models::StockQuote;
use crate::utils::{write_atomic, DashboardError};

/// Periodic producer of `stock-data.json`.
pub struct StockService {
    client: YahooClient,
    holdings: Vec<Holding>,
    output_path: PathBuf,
}

impl StockService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: YahooClient::new(),
            holdings: config.holdings.clone(),
            output_path: config.stock_output_path(),
        }
    }

    /// For testing against a stub quote server.
    pub fn with_client(client: YahooClient, holdings: Vec<Holding>, output_path: PathBuf) -> Self {
        Self {
            client,
            holdings,
            output_path,
        }
    }

    /// Run one fetch cycle: quote every holding, derive gain/loss, and
    /// atomically replace the output file.
    ///
    /// A failed quote never aborts the batch; the symbol is recorded with
    /// null numerics and the error flag set, and the loop continues.
    pub async fn run_cycle(&self) -> Result<(), DashboardError> {
        let mut results = Vec::with_capacity(self.holdings.len());

        for holding in &self.holdings {
            let quote = match self.client.quote_price(&holding.symbol).await {
                Ok(price) => StockQuote::priced(&holding.symbol, holding.cost_basis, price),
                Err(e) => {
                    warn!("quote fetch failed for {}: {}", holding.symbol, e);
                    StockQuote::failed(&holding.symbol, holding.cost_basis)
                }
            };
            results.push(quote);
        }

        let json = serde_json::to_vec_pretty(&results)?;
        write_atomic(&self.output_path, &json)?;
        info!(
            "wrote {} stock records to {}",
            results.len(),
            self.output_path.display()
        );

        Ok(())
    }
}
