//! HTTP clients for the upstream data providers
//!
//! Each provider gets its own module with a client struct and typed serde
//! response models. Base URLs are overridable so tests can point a client at
//! a local stub server.

pub mod nominatim;
pub mod open_meteo;
pub mod yahoo;

pub use nominatim::NominatimClient;
pub use open_meteo::OpenMeteoClient;
pub use yahoo::YahooClient;
