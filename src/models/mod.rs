//! Data models for the generated dashboard snapshots
//!
//! These structs serialize to the exact JSON the front end polls
//! (`stock-data.json` and `weather-data.json`), so field names here are
//! load-bearing.

pub mod icon;
pub mod stock;
pub mod weather;

pub use icon::IconKind;
pub use stock::StockQuote;
pub use weather::{CurrentConditions, WeatherSnapshot};
