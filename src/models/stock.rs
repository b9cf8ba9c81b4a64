//! Stock quote records written to `stock-data.json`

use serde::{Deserialize, Serialize};

/// One tracked holding in the generated stock snapshot.
///
/// `price`, `delta` and `percent` are `None` (JSON `null`) when the quote
/// fetch for this symbol failed; `error` flags that case so the batch can
/// still be written with the other symbols populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockQuote {
    pub symbol: String,
    pub price: Option<f64>,
    pub delta: Option<f64>,
    pub percent: Option<f64>,
    pub cost: f64,
    #[serde(default)]
    pub error: bool,
}

impl StockQuote {
    /// Build a record from a fetched market price and the static cost basis.
    /// All derived values are rounded to two decimals.
    pub fn priced(symbol: &str, cost: f64, price: f64) -> Self {
        let delta = price - cost;
        let percent = (delta / cost) * 100.0;
        StockQuote {
            symbol: symbol.to_string(),
            price: Some(round2(price)),
            delta: Some(round2(delta)),
            percent: Some(round2(percent)),
            cost,
            error: false,
        }
    }

    /// Build the error-flagged record for a symbol whose fetch failed.
    pub fn failed(symbol: &str, cost: f64) -> Self {
        StockQuote {
            symbol: symbol.to_string(),
            price: None,
            delta: None,
            percent: None,
            cost,
            error: true,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priced_quote_rounds_to_two_decimals() {
        let quote = StockQuote::priced("AAPL", 185.25, 201.3333);
        assert_eq!(quote.price, Some(201.33));
        assert_eq!(quote.delta, Some(16.08));
        assert_eq!(quote.percent, Some(8.68));
        assert!(!quote.error);
    }

    #[test]
    fn test_failed_quote_has_null_numerics_and_error_flag() {
        let quote = StockQuote::failed("RDDT", 48.08);
        assert_eq!(quote.price, None);
        assert_eq!(quote.delta, None);
        assert_eq!(quote.percent, None);
        assert_eq!(quote.cost, 48.08);
        assert!(quote.error);
    }

    #[test]
    fn test_json_round_trip_preserves_numerics() {
        let batch = vec![
            StockQuote::priced("GOOGL", 149.76, 171.01),
            StockQuote::failed("NOW", 750.0),
        ];
        let json = serde_json::to_string_pretty(&batch).unwrap();
        let back: Vec<StockQuote> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), 2);
        assert_eq!(back[0].price, batch[0].price);
        assert_eq!(back[0].delta, batch[0].delta);
        assert_eq!(back[0].percent, batch[0].percent);
        assert_eq!(back[0].cost, batch[0].cost);
        assert_eq!(back[1].price, None);
        assert!(back[1].error);
    }
}
